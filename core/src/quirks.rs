/// # Quirks
/// Historical Chip-8 interpreters disagree on a handful of instructions and
/// programs are written against one behaviour or the other. Each variant is a
/// setting here rather than a hard-coded choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quirks {
    /// Source operand of `8xy6` and `8xyE`.
    pub shift: ShiftQuirk,
    /// Offset register of `Bnnn`.
    pub jump_offset: JumpQuirk,
    /// Whether `Fx55` and `Fx65` leave I pointing past the last register.
    pub load_store_increments_i: bool,
}

impl Quirks {
    /// The behaviour of the original COSMAC VIP interpreter.
    pub fn cosmac() -> Self {
        Quirks {
            shift: ShiftQuirk::Legacy,
            jump_offset: JumpQuirk::V0,
            load_store_increments_i: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftQuirk {
    /// Shift Vx in place; Vy is ignored.
    Modern,
    /// Shift Vy and store the result in Vx.
    Legacy,
}

impl Default for ShiftQuirk {
    fn default() -> Self {
        ShiftQuirk::Modern
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpQuirk {
    /// `PC = nnn + V0`
    V0,
    /// `PC = nnn + Vx`, where x is the top nibble of nnn.
    Vx,
}

impl Default for JumpQuirk {
    fn default() -> Self {
        JumpQuirk::V0
    }
}
