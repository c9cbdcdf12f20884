use crate::memory::CHIP8_PROGRAM_ADDR;

/// how many general-purpose registers there are
pub const CHIP8_DATA_REGISTERS: usize = 16;

/// which register reports carry/borrow/shift/collision conditions. Programs
/// must not rely on it holding data across arithmetic.
pub const VF: usize = 0x0f;

/// The register file: V0..VF, the 16-bit index register, the program
/// counter and the two countdown timers. The timers are only ever
/// decremented by the host loop (conventionally at 60Hz); the interpreter
/// reads and writes them but never ticks them itself.
pub struct Chip8Registers {
    pub v: [u8; CHIP8_DATA_REGISTERS],
    pub i: u16,
    pub pc: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl Chip8Registers {
    pub fn new() -> Self {
        Chip8Registers {
            v: [0; CHIP8_DATA_REGISTERS],
            i: 0,
            pc: CHIP8_PROGRAM_ADDR,
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    /// saturating decrement of both timers; called by the host once per tick
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for Chip8Registers {
    fn default() -> Self {
        Self::new()
    }
}
