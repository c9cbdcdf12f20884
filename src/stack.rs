use crate::error::{Chip8Error, Result};

/// how many return addresses the call stack holds
pub const CHIP8_STACK_DEPTH: usize = 16;

/// Bounded stack of return addresses, used only by the CALL/RET pair. The
/// stack pointer always indexes the next free slot; pushing at capacity or
/// popping at zero is a fault, never a silent wrap.
pub struct Chip8Stack {
    frames: [u16; CHIP8_STACK_DEPTH],
    sp: u8,
}

impl Chip8Stack {
    pub fn new() -> Self {
        Chip8Stack {
            frames: [0; CHIP8_STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        if usize::from(self.sp) >= CHIP8_STACK_DEPTH {
            return Err(Chip8Error::StackOverflow);
        }
        self.frames[usize::from(self.sp)] = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.frames[usize::from(self.sp)])
    }

    /// current call depth
    pub fn depth(&self) -> u8 {
        self.sp
    }
}

impl Default for Chip8Stack {
    fn default() -> Self {
        Self::new()
    }
}
