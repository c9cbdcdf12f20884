use crate::error::{Chip8Error, Result};
use std::io;

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless casting

/// how much RAM we have
pub const CHIP8_RAM_SIZE_BYTES: usize = 4096;

/// where a program is loaded
pub const CHIP8_PROGRAM_ADDR: u16 = 0x0200;

/// where the built-in character set lives and how big each glyph is
pub const CHIP8_FONT_ADDR: u16 = 0x0000;
pub const CHIP8_FONT_GLYPH_BYTES: u16 = 5;

/// Flat byte-addressable store. The first 80 bytes hold the built-in
/// character set, written once at construction; everything else starts
/// zeroed. Every access is bounds-checked: a CHIP-8 program that reaches
/// past 4K indicates either a decode bug or a malformed program, and must
/// fault rather than wrap.
pub struct Chip8Memory {
    bytes: Box<[u8; CHIP8_RAM_SIZE_BYTES]>,
}

impl Chip8Memory {
    /// initialises RAM with the character set baked in at 0x000
    pub fn new() -> Self {
        let mut bytes = Box::new([0u8; CHIP8_RAM_SIZE_BYTES]);
        let font_at = CHIP8_FONT_ADDR as usize;
        bytes[font_at..font_at + CHIP8_FONT.len()].copy_from_slice(&CHIP8_FONT);
        Chip8Memory { bytes }
    }

    /// write a single byte
    pub fn set(&mut self, addr: u16, val: u8) -> Result<()> {
        let cell = self
            .bytes
            .get_mut(addr as usize)
            .ok_or(Chip8Error::OutOfBoundsAccess { address: addr })?;
        *cell = val;
        Ok(())
    }

    /// read a single byte
    pub fn get(&self, addr: u16) -> Result<u8> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(Chip8Error::OutOfBoundsAccess { address: addr })
    }

    /// read a two-byte instruction word, high byte first
    pub fn get_instruction_word(&self, addr: u16) -> Result<u16> {
        let hi = self.get(addr)?;
        let lo = self.get(addr.wrapping_add(1))?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// get a r/o slice of the underlying memory (sprite rows, mostly)
    pub fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let a = addr as usize;
        self.bytes
            .get(a..a + len)
            .ok_or(Chip8Error::OutOfBoundsAccess { address: addr })
    }

    /// copy a program image in at 0x200
    pub fn load_program_bytes(&mut self, program: &[u8]) -> Result<()> {
        let load_at = CHIP8_PROGRAM_ADDR as usize;
        let capacity = CHIP8_RAM_SIZE_BYTES - load_at;
        if program.len() > capacity {
            return Err(Chip8Error::ProgramTooLarge {
                size: program.len(),
                capacity,
            });
        }
        self.bytes[load_at..load_at + program.len()].copy_from_slice(program);
        log::debug!("loaded {} byte program at {:#06x}", program.len(), load_at);
        Ok(())
    }

    /// load a program of unknown length from a reader
    pub fn load_program(&mut self, reader: &mut impl io::Read) -> io::Result<()> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.load_program_bytes(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Default for Chip8Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// address of the glyph for a hex digit (low nibble only is significant)
pub fn font_sprite_addr(digit: u8) -> u16 {
    CHIP8_FONT_ADDR + u16::from(digit & 0x0f) * CHIP8_FONT_GLYPH_BYTES
}

/// the contemporary 16-glyph hex character set, 5 rows per glyph
const CHIP8_FONT: [u8; 80] = [
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
