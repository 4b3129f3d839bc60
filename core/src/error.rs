use std::io;

use thiserror::Error;

use crate::constants::MAX_PROGRAM_SIZE;

/// Errors a caller of the Chip-8 can observe.
///
/// Nothing that happens while executing instructions ends up here; those faults
/// are logged and recovered from inside `step`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("program is {size} bytes but only {} bytes are available from 0x200", MAX_PROGRAM_SIZE)]
    ProgramTooLarge { size: usize },

    #[error("unable to read program: {0}")]
    Io(#[from] io::Error),
}

/// Faults raised by the call stack.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    #[error("stack overflow: all {0} slots are in use")]
    Overflow(usize),

    #[error("stack underflow: return with no pending call")]
    Underflow,
}
