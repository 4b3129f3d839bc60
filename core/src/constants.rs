/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every memory address and to the program counter.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where programs are loaded and where execution starts.
pub const PROGRAM_START: u16 = 0x200;

/// Largest program that fits between `PROGRAM_START` and the top of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Width of a single instruction in bytes.
pub const INSTRUCTION_WIDTH: u16 = 2;

/// Number of return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Rate at which the delay and sound timers are decremented.
pub const TIMER_HZ: u32 = 60;

/// Address of the glyph for `0` in the sprite sheet.
pub const SPRITE_SHEET_START: u16 = 0x000;

/// Bytes per glyph in the sprite sheet.
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite sheet
/// The built-in hexadecimal glyphs `0..F`, each 4 pixels wide and 5 rows tall.
///
/// ```text
/// 0xF0 -> ####....
/// 0x90 -> #..#....
/// 0x90 -> #..#....
/// 0x90 -> #..#....
/// 0xF0 -> ####....
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
