use std::path::PathBuf;

use emu8_core::Quirks;

/// Everything the front end needs to run a ROM.
#[derive(Clone, Debug)]
pub struct Config {
    pub rom: PathBuf,
    pub quirks: Quirks,
    /// Instructions executed between two 60Hz timer ticks.
    pub cycles_per_frame: usize,
    /// Window pixels per Chip-8 pixel.
    pub scale: u32,
    pub seed: Option<u64>,
}
