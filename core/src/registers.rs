/// Index of the flag register.
pub const VF: u8 = 0xF;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
/// - 2 8-bit timers (delay & sound), decremented at 60Hz
///
/// Register indices are taken from a single nibble; anything above 0xF is
/// masked down rather than rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: u8) -> u8 {
        self.v[(x & 0xF) as usize]
    }

    pub fn set(&mut self, x: u8, value: u8) {
        self.v[(x & 0xF) as usize] = value;
    }

    /// Writes VF as a boolean flag.
    ///
    /// Must be the last write an instruction performs so the flag wins when
    /// the destination register is VF itself.
    pub fn set_flag(&mut self, flag: bool) {
        self.v[VF as usize] = u8::from(flag);
    }

    pub fn flag(&self) -> u8 {
        self.v[VF as usize]
    }

    /// Decrements both timers towards zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}
