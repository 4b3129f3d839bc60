use crate::constants::{ADDRESS_MASK, MEMORY_SIZE, SPRITE_SHEET, SPRITE_SHEET_START};
use crate::error::Error;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// - 0x000..0x050 holds the built-in sprite sheet
/// - 0x200.. is where programs are loaded
///
/// Addresses wrap around the top of memory instead of faulting, so every
/// `u16` is a valid address.
#[derive(Copy, Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet installed.
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let start = SPRITE_SHEET_START as usize;
        bytes[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDRESS_MASK) as usize]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[(addr & ADDRESS_MASK) as usize] = value;
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Unlike single reads and writes this does not wrap; a block that runs
    /// past the top of memory is rejected.
    pub fn load(&mut self, offset: u16, data: &[u8]) -> Result<(), Error> {
        let start = (offset & ADDRESS_MASK) as usize;
        if data.len() > MEMORY_SIZE - start {
            return Err(Error::ProgramTooLarge { size: data.len() });
        }
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// The raw backing store.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROGRAM_START;

    #[test]
    fn test_memory_zeroed_after_sprite_sheet() {
        let memory = Memory::new();
        assert_eq!(memory.as_slice()[..80], SPRITE_SHEET[..]);
        assert!(memory.as_slice()[80..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_read_write() {
        let mut memory = Memory::new();
        memory.write(0x300, 0xAB);
        assert_eq!(memory.read(0x300), 0xAB);
    }

    #[test]
    fn test_addresses_wrap() {
        let mut memory = Memory::new();
        memory.write(0x1005, 0x42);
        assert_eq!(memory.read(0x005), 0x42);
        assert_eq!(memory.read(0xF005), 0x42);
    }

    #[test]
    fn test_load_at_program_start() {
        let mut memory = Memory::new();
        memory.load(PROGRAM_START, &[0x00, 0xE0]).unwrap();
        assert_eq!(memory.read(0x200), 0x00);
        assert_eq!(memory.read(0x201), 0xE0);
    }

    #[test]
    fn test_load_fills_to_top_of_memory() {
        let mut memory = Memory::new();
        let data = [0xFF; 0xE00];
        assert!(memory.load(PROGRAM_START, &data).is_ok());
        assert_eq!(memory.read(0xFFF), 0xFF);
    }

    #[test]
    fn test_load_rejects_overflowing_block() {
        let mut memory = Memory::new();
        let data = [0xFF; 0xE01];
        match memory.load(PROGRAM_START, &data) {
            Err(Error::ProgramTooLarge { size }) => assert_eq!(size, 0xE01),
            other => panic!("expected ProgramTooLarge, got {:?}", other),
        }
        // nothing was written
        assert_eq!(memory.read(0x200), 0x00);
    }
}
