use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use emu8_core::constants::TIMER_HZ;
use emu8_core::{Chip8, Keypad};
use emu8_display::SdlDisplay;

use crate::config::Config;
use crate::keymap::keymap;

pub fn run(config: &Config) -> Result<()> {
    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!("unable to initialise sdl: {}", e))?;
    let display = SdlDisplay::new(&sdl, config.scale)?;
    let mut events = sdl
        .event_pump()
        .map_err(|e| anyhow!("unable to get event pump: {}", e))?;

    let mut chip8 = Chip8::new(display, Keypad::new()).with_quirks(config.quirks);
    if let Some(seed) = config.seed {
        chip8 = chip8.with_seed(seed);
    }

    // Load ROM
    let file = File::open(&config.rom)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    chip8
        .load_rom(&mut BufReader::new(file))
        .with_context(|| format!("unable to load {}", config.rom.display()))?;

    // One batch of instructions and one timer tick per frame
    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut last_frame = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        chip8.run(config.cycles_per_frame);
        chip8.tick_timers();

        // Handle timing
        let current_time = Instant::now();
        let elapsed = current_time - last_frame;
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    debug!("quit");
    Ok(())
}
