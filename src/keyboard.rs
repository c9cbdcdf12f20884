use std::collections::HashMap;

/// how many logical keys the chip-8 keypad has
pub const CHIP8_TOTAL_KEYS: usize = 16;

/// map of physical keys to what the chip8 expects, using the left-hand side
/// of a qwerty keyboard
const CHIP8_CONVENTIONAL_KEYMAP: [(char, u8); 16] = [
    ('x', 0x00), // x
    ('1', 0x01), // 1
    ('2', 0x02), // 2
    ('3', 0x03), // 3
    ('q', 0x04), // q
    ('w', 0x05), // w
    ('e', 0x06), // e
    ('a', 0x07), // a
    ('s', 0x08), // s
    ('d', 0x09), // d
    ('z', 0x0a), // z
    ('c', 0x0b), // c
    ('4', 0x0c), // 4
    ('r', 0x0d), // r
    ('f', 0x0e), // f
    ('v', 0x0f), // v
];

/// Pressed/released state for the 16 logical keys, plus the table that maps
/// physical key codes onto them. The host's input collaborator drives the
/// transitions; instruction handlers only ever read.
pub struct Chip8Keyboard {
    keys: [bool; CHIP8_TOTAL_KEYS],
    keymap: HashMap<char, u8>,
}

impl Chip8Keyboard {
    /// keyboard with the conventional qwerty mapping
    pub fn new() -> Self {
        Chip8Keyboard {
            keys: [false; CHIP8_TOTAL_KEYS],
            keymap: HashMap::from(CHIP8_CONVENTIONAL_KEYMAP),
        }
    }

    /// keyboard with a caller-supplied physical mapping
    pub fn with_keymap(keymap: HashMap<char, u8>) -> Self {
        Chip8Keyboard {
            keys: [false; CHIP8_TOTAL_KEYS],
            keymap,
        }
    }

    /// logical key for a physical code, if one is mapped
    pub fn map_key(&self, physical: char) -> Option<u8> {
        self.keymap.get(&physical).copied()
    }

    pub fn set_pressed(&mut self, key: u8) {
        self.keys[usize::from(key & 0x0f)] = true;
    }

    pub fn set_released(&mut self, key: u8) {
        self.keys[usize::from(key & 0x0f)] = false;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[usize::from(key & 0x0f)]
    }

    /// lowest-numbered key currently held, for the wait-for-key instruction
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&down| down).map(|k| k as u8)
    }

    /// physical key-down event; unmapped codes are ignored
    pub fn press_physical(&mut self, physical: char) {
        match self.map_key(physical) {
            Some(key) => self.set_pressed(key),
            None => log::debug!("no chip-8 mapping for physical key {:?}", physical),
        }
    }

    /// physical key-up event; unmapped codes are ignored
    pub fn release_physical(&mut self, physical: char) {
        if let Some(key) = self.map_key(physical) {
            self.set_released(key);
        }
    }
}

impl Default for Chip8Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
