use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Display
/// The Chip-8 draws by XOR-ing rows of 8 pixels onto a 64x32 monochrome
/// surface. Whatever owns the pixels implements this; the Chip-8 only ever
/// talks to it through these three calls.
pub trait Display {
    /// Turns every pixel off.
    fn clear(&mut self);

    /// XORs the bits of `byte` (most significant first) onto row `y` starting
    /// at column `x`. Both coordinates wrap around the edges.
    ///
    /// Returns true if any pixel that was on got turned off.
    fn draw_byte(&mut self, x: u8, y: u8, byte: u8) -> bool;

    /// Pushes the current pixels to wherever they are shown. Called once per
    /// timer tick.
    fn refresh(&mut self);
}

/// The FrameBuffer's pixels are indexed as [y][x]
pub type Pixels = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Frame buffer
/// An in-memory display. On its own it is a headless display; windowed
/// displays wrap one and render it on `refresh`.
///
/// Tracks whether anything changed since it was last marked clean so renderers
/// can skip redrawing identical frames.
#[derive(Copy, Clone)]
pub struct FrameBuffer {
    pixels: Pixels,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FrameBuffer {
    fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    fn draw_byte(&mut self, x: u8, y: u8, byte: u8) -> bool {
        let row = &mut self.pixels[y as usize % DISPLAY_HEIGHT];
        let mut erased = false;
        for bit in 0..8 {
            let col = (x as usize + bit) % DISPLAY_WIDTH;
            let pixel_value = (byte >> (7 - bit)) & 1;
            erased |= (pixel_value & row[col]) == 1;
            row[col] ^= pixel_value;
        }
        self.dirty = true;
        erased
    }

    fn refresh(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_byte_sets_pixels_msb_first() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.draw_byte(0, 0, 0b1010_0000));
        assert_eq!(frame.pixels()[0][0..4], [1, 0, 1, 0]);
    }

    #[test]
    fn test_draw_byte_xors() {
        let mut frame = FrameBuffer::new();
        frame.draw_byte(2, 0, 0b0101_0000);
        // 0 1 0 1 -> Set
        // 1 1 0 0 -> Draw xor
        assert!(frame.draw_byte(2, 0, 0b1100_0000));
        assert_eq!(frame.pixels()[0][2..6], [1, 0, 0, 1]);
    }

    #[test]
    fn test_draw_byte_wraps_horizontally() {
        let mut frame = FrameBuffer::new();
        frame.draw_byte(62, 0, 0xFF);
        assert_eq!(frame.pixels()[0][62..64], [1, 1]);
        assert_eq!(frame.pixels()[0][0..6], [1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_draw_byte_wraps_vertically() {
        let mut frame = FrameBuffer::new();
        frame.draw_byte(0, 33, 0x80);
        assert_eq!(frame.pixel(0, 1), 1);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw_byte(10, 10, 0xFF);
        frame.clear();
        assert!(frame.pixels().iter().flatten().all(|&p| p == 0));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.is_dirty());
        frame.draw_byte(0, 0, 0x01);
        assert!(frame.is_dirty());
        frame.mark_clean();
        assert!(!frame.is_dirty());
    }
}
