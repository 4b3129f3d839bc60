use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use emu8_core::constants::PROGRAM_START;
use emu8_core::{disassemble, JumpQuirk, Quirks, ShiftQuirk};

use crate::config::Config;

mod config;
mod keymap;
mod run;

/// Runs a Chip-8 ROM in an SDL2 window.
///
/// The keypad is mapped to 1234/QWER/ASDF/ZXCV. Hold space to fast forward and
/// press escape to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per 60Hz frame
    #[arg(long, default_value_t = 10)]
    cycles_per_frame: usize,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Source register of 8xy6 and 8xyE
    #[arg(long, value_enum, default_value_t = ShiftArg::Modern)]
    shift_quirk: ShiftArg,

    /// Offset register of Bnnn
    #[arg(long, value_enum, default_value_t = JumpArg::V0)]
    jump_quirk: JumpArg,

    /// Have Fx55 and Fx65 leave I past the last register they touch
    #[arg(long)]
    load_store_increments_i: bool,

    /// Fixed seed for Cxkk
    #[arg(long)]
    seed: Option<u64>,

    /// Print a listing of the ROM and exit
    #[arg(long)]
    disassemble: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShiftArg {
    Modern,
    Legacy,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum JumpArg {
    V0,
    Vx,
}

impl From<ShiftArg> for ShiftQuirk {
    fn from(arg: ShiftArg) -> Self {
        match arg {
            ShiftArg::Modern => ShiftQuirk::Modern,
            ShiftArg::Legacy => ShiftQuirk::Legacy,
        }
    }
}

impl From<JumpArg> for JumpQuirk {
    fn from(arg: JumpArg) -> Self {
        match arg {
            JumpArg::V0 => JumpQuirk::V0,
            JumpArg::Vx => JumpQuirk::Vx,
        }
    }
}

impl Args {
    fn config(&self) -> Config {
        Config {
            rom: self.rom.clone(),
            quirks: Quirks {
                shift: self.shift_quirk.into(),
                jump_offset: self.jump_quirk.into(),
                load_store_increments_i: self.load_store_increments_i,
            },
            cycles_per_frame: self.cycles_per_frame,
            scale: self.scale,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if args.disassemble {
        let program = fs::read(&args.rom)
            .with_context(|| format!("unable to read {}", args.rom.display()))?;
        for line in disassemble(&program, PROGRAM_START) {
            println!("{}", line);
        }
        return Ok(());
    }

    run::run(&args.config())
}
