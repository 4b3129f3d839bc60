use crate::constants::{ADDRESS_MASK, INSTRUCTION_WIDTH, PROGRAM_START};
use crate::memory::Memory;
use crate::opcode;
use crate::registers::Registers;
use crate::stack::Stack;

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// - (registers) V0..VF, I and the two timers
/// - (pc) a program counter confined to the 12-bit address space
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///
/// The frame buffer and key state are not part of this; they belong to the
/// display and input the Chip-8 was built with.
#[derive(Copy, Clone)]
pub struct State {
    pub registers: Registers,
    pub pc: ProgramCounter,
    pub stack: Stack,
    pub memory: Memory,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            pc: ProgramCounter::new(),
            stack: Stack::new(),
            memory: Memory::new(),
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> u16 {
        let pc = self.pc.current();
        opcode::from_bytes(self.memory.read(pc), self.memory.read(pc.wrapping_add(1)))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// # Program counter
/// Always holds an address inside memory; anything written to it is masked
/// down to 12 bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProgramCounter(u16);

impl ProgramCounter {
    pub fn new() -> Self {
        ProgramCounter(PROGRAM_START)
    }

    pub fn current(&self) -> u16 {
        self.0
    }

    pub fn jump(&mut self, addr: u16) {
        self.0 = addr & ADDRESS_MASK;
    }

    pub fn advance(&mut self) {
        self.jump(self.0.wrapping_add(INSTRUCTION_WIDTH));
    }

    /// Where execution would continue without a jump.
    pub fn next(&self) -> u16 {
        self.0.wrapping_add(INSTRUCTION_WIDTH) & ADDRESS_MASK
    }
}

impl Default for ProgramCounter {
    fn default() -> Self {
        Self::new()
    }
}
