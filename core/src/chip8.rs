use std::io::Read;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::PROGRAM_START;
use crate::display::Display;
use crate::error::Error;
use crate::input::Input;
use crate::instruction;
use crate::mnemonic::mnemonic;
use crate::operations::Context;
use crate::quirks::Quirks;
use crate::registers::Registers;
use crate::state::{ProgramCounter, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state` (memory, registers, stack and pc)
///  - the `display` and `input` it was built with
///  - the `quirks` that decide between historical instruction variants
///
/// Supplies interfaces for:
/// - loading programs
/// - advancing the CPU one instruction at a time
/// - advancing its timers
///
/// Nothing here keeps time. Whatever embeds the Chip-8 calls `step` as often
/// as it likes and `tick_timers` at 60Hz.
pub struct Chip8<D: Display, I: Input> {
    state: State,
    quirks: Quirks,
    display: D,
    input: I,
    rng: StdRng,
}

impl<D: Display, I: Input> Chip8<D, I> {
    pub fn new(display: D, input: I) -> Self {
        Chip8 {
            state: State::new(),
            quirks: Quirks::default(),
            display,
            input,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.quirks = quirks;
        self
    }

    /// Makes `Cxkk` deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Restarts execution of whatever is in memory
    /// - zeroes registers and timers
    /// - empties the stack
    /// - points the pc back at the start of the program
    /// - clears the display
    pub fn reset(&mut self) {
        self.state.registers = Registers::new();
        self.state.stack.clear();
        self.state.pc = ProgramCounter::new();
        self.display.clear();
        debug!("reset");
    }

    /// Copies a program into memory at 0x200
    ///
    /// # Arguments
    /// * `program` raw big-endian opcodes
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Error> {
        self.state.memory.load(PROGRAM_START, program)?;
        info!("loaded {} byte program at {:#05X}", program.len(), PROGRAM_START);
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Advances the CPU by a single instruction
    ///
    /// Never fails; malformed instructions are logged and skipped.
    pub fn step(&mut self) {
        let op = self.state.fetch();
        trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:04X}",
            self.state.pc.current(),
            op,
            mnemonic(&op),
            self.state.registers.v,
            self.state.registers.i
        );
        let mut ctx = Context {
            display: &mut self.display,
            input: &mut self.input,
            rng: &mut self.rng,
            quirks: self.quirks,
        };
        instruction::execute(op, &mut self.state, &mut ctx);
    }

    /// Runs `cycles` instructions back to back.
    pub fn run(&mut self, cycles: usize) {
        for _ in 0..cycles {
            self.step();
        }
    }

    /// One 60Hz tick
    /// - decrements the delay and sound timers
    /// - has the display push out the current frame
    pub fn tick_timers(&mut self) {
        self.state.registers.tick_timers();
        self.display.refresh();
    }

    /// Whether a tone should be playing.
    pub fn sound_active(&self) -> bool {
        self.state.registers.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PROGRAM_SIZE;
    use crate::display::FrameBuffer;
    use crate::input::Keypad;

    fn chip8(program: &[u8]) -> Chip8<FrameBuffer, Keypad> {
        let mut chip8 = Chip8::new(FrameBuffer::new(), Keypad::new()).with_seed(0);
        assert_eq!(chip8.quirks(), Quirks::default());
        chip8.load_program(program).unwrap();
        chip8
    }

    /// Counts refreshes so timer ticks can be observed.
    #[derive(Default)]
    struct CountingDisplay {
        frame: FrameBuffer,
        refreshes: usize,
    }

    impl Display for CountingDisplay {
        fn clear(&mut self) {
            self.frame.clear()
        }

        fn draw_byte(&mut self, x: u8, y: u8, byte: u8) -> bool {
            self.frame.draw_byte(x, y, byte)
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    #[test]
    fn test_chip8_starts_at_program_start() {
        let chip8 = chip8(&[]);
        assert_eq!(chip8.state().pc.current(), 0x200);
    }

    #[test]
    fn test_step_advances_pc() {
        // insert a cls opcode so the first step is well defined
        let mut chip8 = chip8(&[0x00, 0xE0]);
        chip8.step();
        assert_eq!(chip8.state().pc.current(), 0x202);
    }

    #[test]
    fn test_jump_loop_parks_pc() {
        let mut chip8 = chip8(&[0x60, 0x05, 0x12, 0x00]);
        chip8.run(3);
        assert_eq!(chip8.state().registers.v[0x0], 0x5);
        assert_eq!(chip8.state().pc.current(), 0x202);
        chip8.run(2);
        assert_eq!(chip8.state().pc.current(), 0x202);
    }

    #[test]
    fn test_call_then_return() {
        // 200: CALL 206
        // 202: LD V1, 01
        // 204: JP 204
        // 206: LD V0, 07
        // 208: RET
        let mut chip8 = chip8(&[
            0x22, 0x06, 0x61, 0x01, 0x12, 0x04, 0x60, 0x07, 0x00, 0xEE,
        ]);
        chip8.run(3);
        assert_eq!(chip8.state().pc.current(), 0x202);
        assert_eq!(chip8.state().stack.pointer(), 0);
        chip8.step();
        assert_eq!(chip8.state().registers.v[0x0], 0x7);
        assert_eq!(chip8.state().registers.v[0x1], 0x1);
    }

    #[test]
    fn test_waits_for_key() {
        let mut chip8 = chip8(&[0xF3, 0x0A]);
        chip8.run(5);
        assert_eq!(chip8.state().pc.current(), 0x200);
        chip8.input_mut().press(0xC);
        chip8.step();
        assert_eq!(chip8.state().registers.v[0x3], 0xC);
        assert_eq!(chip8.state().pc.current(), 0x202);
    }

    #[test]
    fn test_timers_decay_to_zero() {
        // LD V0, 02; LD DT, V0
        let mut chip8 = chip8(&[0x60, 0x02, 0xF0, 0x15]);
        chip8.run(2);
        assert_eq!(chip8.state().registers.delay_timer, 2);
        chip8.tick_timers();
        assert_eq!(chip8.state().registers.delay_timer, 1);
        chip8.tick_timers();
        assert_eq!(chip8.state().registers.delay_timer, 0);
        chip8.tick_timers();
        assert_eq!(chip8.state().registers.delay_timer, 0);
    }

    #[test]
    fn test_sound_active_while_sound_timer_runs() {
        // LD V0, 01; LD ST, V0
        let mut chip8 = chip8(&[0x60, 0x01, 0xF0, 0x18]);
        chip8.run(2);
        assert!(chip8.sound_active());
        chip8.tick_timers();
        assert!(!chip8.sound_active());
    }

    #[test]
    fn test_tick_refreshes_display() {
        let mut chip8 = Chip8::new(CountingDisplay::default(), Keypad::new());
        chip8.tick_timers();
        chip8.tick_timers();
        assert_eq!(chip8.display().refreshes, 2);
    }

    #[test]
    fn test_reset_keeps_memory() {
        // LD V0, 05; CALL 200
        let mut chip8 = chip8(&[0x60, 0x05, 0x22, 0x00]);
        chip8.run(2);
        chip8.display_mut().draw_byte(0, 0, 0xFF);
        chip8.reset();
        assert_eq!(chip8.state().registers, Registers::new());
        assert_eq!(chip8.state().stack.pointer(), 0);
        assert_eq!(chip8.state().pc.current(), 0x200);
        assert_eq!(chip8.display().pixel(0, 0), 0);
        assert_eq!(chip8.state().fetch(), 0x6005);
    }

    #[test]
    fn test_load_program_too_large() {
        let mut chip8 = Chip8::new(FrameBuffer::new(), Keypad::new());
        let program = vec![0; MAX_PROGRAM_SIZE + 1];
        assert!(matches!(
            chip8.load_program(&program),
            Err(Error::ProgramTooLarge { .. })
        ));
    }

    #[test]
    fn test_load_rom_from_reader() {
        let mut chip8 = Chip8::new(FrameBuffer::new(), Keypad::new());
        let mut rom: &[u8] = &[0x00, 0xE0];
        chip8.load_rom(&mut rom).unwrap();
        assert_eq!(chip8.state().fetch(), 0x00E0);
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        // RND V0, FF
        let mut a = chip8(&[0xC0, 0xFF]);
        let mut b = chip8(&[0xC0, 0xFF]);
        a.step();
        b.step();
        assert_eq!(a.state().registers.v[0x0], b.state().registers.v[0x0]);
    }
}
