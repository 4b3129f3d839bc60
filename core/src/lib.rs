pub use chip8::Chip8;
pub use display::{Display, FrameBuffer, Pixels};
pub use error::{Error, StackError};
pub use input::{Input, Keypad};
pub use mnemonic::{disassemble, mnemonic};
pub use operations::Flow;
pub use quirks::{JumpQuirk, Quirks, ShiftQuirk};

mod chip8;
pub mod constants;
mod display;
mod error;
mod input;
mod instruction;
pub mod memory;
mod mnemonic;
pub mod opcode;
mod operations;
mod quirks;
pub mod registers;
pub mod stack;
pub mod state;
