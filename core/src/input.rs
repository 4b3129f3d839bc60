use log::debug;

/// # Input
/// Chip-8 input comes from a 16 key hexadecimal keypad.
pub trait Input {
    /// Whether `key` is currently held down. Keys above 0xF are never held.
    fn is_pressed(&self, key: u8) -> bool;

    /// Returns the key pressed since the previous poll, if any.
    ///
    /// The first poll starts a wait; a press is only latched while a wait is in
    /// progress, and a poll that returns `Some` ends the wait.
    fn poll_for_press(&mut self) -> Option<u8>;
}

/// # Keypad
/// The stock `Input`: the embedding program forwards key events to `press`
/// and `release` (already mapped to 0x0..=0xF).
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Keypad {
    pressed_keys: [bool; 16],
    waiting: bool,
    last_press: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn press(&mut self, key: u8) {
        match self.pressed_keys.get_mut(key as usize) {
            Some(state) => {
                *state = true;
                if self.waiting {
                    self.last_press = Some(key);
                }
                debug!("key {:X} pressed", key);
            }
            None => debug!("ignoring press of unmapped key {:#04X}", key),
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn release(&mut self, key: u8) {
        if let Some(state) = self.pressed_keys.get_mut(key as usize) {
            *state = false;
        }
    }
}

impl Input for Keypad {
    fn is_pressed(&self, key: u8) -> bool {
        self.pressed_keys.get(key as usize).copied().unwrap_or(false)
    }

    fn poll_for_press(&mut self) -> Option<u8> {
        self.waiting = true;
        let key = self.last_press.take();
        if key.is_some() {
            self.waiting = false;
        }
        key
    }
}
