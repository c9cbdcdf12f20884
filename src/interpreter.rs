//! The execution engine proper: owns the whole machine state and runs one
//! fetch/decode/execute cycle per call to [`Chip8Interpreter::step`].
//!
//! The interpreter never schedules time itself. The host loop is the
//! authority on pacing: it calls `step` at whatever instruction rate it
//! wants, calls `tick_timers` at its own cadence (conventionally 60Hz),
//! renders by reading the framebuffer, and feeds key transitions into the
//! keyboard. The one instruction that can't complete in a single cycle is
//! FX0A (wait for key): rather than block the host's render/input thread,
//! `step` parks the interpreter in an awaiting-key state and keeps
//! returning [`Cycle::AwaitingKey`] until some logical key goes down.

use crate::error::Result;
use crate::framebuffer::Chip8Framebuffer;
use crate::instruction::Instruction;
use crate::keyboard::Chip8Keyboard;
use crate::memory::{font_sprite_addr, Chip8Memory, CHIP8_PROGRAM_ADDR};
use crate::registers::{Chip8Registers, VF};
use crate::stack::Chip8Stack;
use rand::Rng;
use std::io;

/// What one call to `step` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cycle {
    /// an instruction ran to completion
    Executed,
    /// parked on FX0A until the host reports a key press
    AwaitingKey,
}

/// A complete chip-8 machine. All state is owned here; run several
/// independent VMs by constructing several of these.
pub struct Chip8Interpreter {
    memory: Chip8Memory,
    registers: Chip8Registers,
    stack: Chip8Stack,
    keyboard: Chip8Keyboard,
    framebuffer: Chip8Framebuffer,
    /// destination register while parked on FX0A
    awaiting_key: Option<usize>,
}

impl Chip8Interpreter {
    pub fn new() -> Self {
        Chip8Interpreter {
            memory: Chip8Memory::new(),
            registers: Chip8Registers::new(),
            stack: Chip8Stack::new(),
            keyboard: Chip8Keyboard::new(),
            framebuffer: Chip8Framebuffer::new(),
            awaiting_key: None,
        }
    }

    /// load a chip8 program and point the program counter at it
    pub fn load_program(&mut self, reader: &mut impl io::Read) -> io::Result<()> {
        self.memory.load_program(reader)?;
        self.registers.pc = CHIP8_PROGRAM_ADDR;
        Ok(())
    }

    /// same, from a byte slice
    pub fn load_program_bytes(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load_program_bytes(program)?;
        self.registers.pc = CHIP8_PROGRAM_ADDR;
        Ok(())
    }

    /// Execute one instruction. Fetches the word at PC, advances PC by two,
    /// then dispatches; jump/call/return overwrite PC and the skip
    /// instructions advance it a further two. Address and stack faults end
    /// the instance; words the chip-8 never assigned are logged and skipped.
    pub fn step(&mut self) -> Result<Cycle> {
        if let Some(x) = self.awaiting_key {
            return Ok(self.poll_awaited_key(x));
        }

        let word = self.memory.get_instruction_word(self.registers.pc)?;
        self.registers.pc = self.registers.pc.wrapping_add(2);

        match Instruction::decode(word) {
            Some(instruction) => self.execute(instruction),
            None => {
                log::warn!("unknown instruction {:#06x}, treating as no-op", word);
                Ok(Cycle::Executed)
            }
        }
    }

    /// saturating decrement of both timers; the host calls this at its own
    /// cadence, never faster than once per tick
    pub fn tick_timers(&mut self) {
        self.registers.tick_timers();
    }

    /// true while the sound timer is non-zero; the audio collaborator's cue
    pub fn sound_active(&self) -> bool {
        self.registers.sound_timer > 0
    }

    /// for hosts that emit one tone per timer load and then silence it
    pub fn clear_sound_timer(&mut self) {
        self.registers.sound_timer = 0;
    }

    /// the display collaborator reads pixels from here each frame
    pub fn framebuffer(&self) -> &Chip8Framebuffer {
        &self.framebuffer
    }

    pub fn keyboard(&self) -> &Chip8Keyboard {
        &self.keyboard
    }

    /// the input collaborator feeds key transitions through here
    pub fn keyboard_mut(&mut self) -> &mut Chip8Keyboard {
        &mut self.keyboard
    }

    /// register file, for host diagnostics
    pub fn registers(&self) -> &Chip8Registers {
        &self.registers
    }

    fn poll_awaited_key(&mut self, x: usize) -> Cycle {
        match self.keyboard.first_pressed() {
            Some(key) => {
                self.registers.v[x] = key;
                self.awaiting_key = None;
                Cycle::Executed
            }
            None => Cycle::AwaitingKey,
        }
    }

    /// skip the next instruction
    fn skip(&mut self) {
        self.registers.pc = self.registers.pc.wrapping_add(2);
    }

    fn execute(&mut self, instruction: Instruction) -> Result<Cycle> {
        use Instruction::*;

        let regs = &mut self.registers;
        match instruction {
            // a machine-language routine on the original hardware; nothing
            // to run here
            Sys { nnn: _ } => {}
            Cls => self.framebuffer.clear(),
            Ret => regs.pc = self.stack.pop()?,
            Jp { nnn } => regs.pc = nnn,
            Call { nnn } => {
                // PC has already advanced past the CALL, so this frame is
                // the return address
                self.stack.push(regs.pc)?;
                regs.pc = nnn;
            }
            SeByte { x, kk } => {
                if regs.v[x] == kk {
                    self.skip();
                }
            }
            SneByte { x, kk } => {
                if regs.v[x] != kk {
                    self.skip();
                }
            }
            SeReg { x, y } => {
                if regs.v[x] == regs.v[y] {
                    self.skip();
                }
            }
            LdByte { x, kk } => regs.v[x] = kk,
            AddByte { x, kk } => regs.v[x] = regs.v[x].wrapping_add(kk),
            LdReg { x, y } => regs.v[x] = regs.v[y],
            Or { x, y } => regs.v[x] |= regs.v[y],
            And { x, y } => regs.v[x] &= regs.v[y],
            Xor { x, y } => regs.v[x] ^= regs.v[y],
            AddReg { x, y } => {
                let (sum, carry) = regs.v[x].overflowing_add(regs.v[y]);
                regs.v[x] = sum;
                regs.v[VF] = carry.into();
            }
            Sub { x, y } => {
                // the flag reflects the comparison before truncation, and
                // lands in VF last in case x or y is VF itself
                let no_borrow = regs.v[x] > regs.v[y];
                regs.v[x] = regs.v[x].wrapping_sub(regs.v[y]);
                regs.v[VF] = no_borrow.into();
            }
            Shr { x } => {
                let low_bit = regs.v[x] & 0x01;
                regs.v[x] >>= 1;
                regs.v[VF] = low_bit;
            }
            Subn { x, y } => {
                let no_borrow = regs.v[y] > regs.v[x];
                regs.v[x] = regs.v[y].wrapping_sub(regs.v[x]);
                regs.v[VF] = no_borrow.into();
            }
            Shl { x } => {
                let high_bit = (regs.v[x] & 0x80 != 0).into();
                regs.v[x] <<= 1;
                regs.v[VF] = high_bit;
            }
            SneReg { x, y } => {
                if regs.v[x] != regs.v[y] {
                    self.skip();
                }
            }
            LdI { nnn } => regs.i = nnn,
            JpV0 { nnn } => regs.pc = nnn.wrapping_add(u16::from(regs.v[0])),
            Rnd { x, kk } => regs.v[x] = rand::thread_rng().gen::<u8>() & kk,
            Drw { x, y, n } => {
                let sprite = self.memory.get_ro_slice(regs.i, usize::from(n))?;
                let erased = self.framebuffer.draw_sprite(
                    usize::from(regs.v[x]),
                    usize::from(regs.v[y]),
                    sprite,
                );
                regs.v[VF] = erased.into();
            }
            Skp { x } => {
                if self.keyboard.is_pressed(regs.v[x]) {
                    self.skip();
                }
            }
            Sknp { x } => {
                if !self.keyboard.is_pressed(regs.v[x]) {
                    self.skip();
                }
            }
            LdRegDelay { x } => regs.v[x] = regs.delay_timer,
            WaitKey { x } => match self.keyboard.first_pressed() {
                Some(key) => regs.v[x] = key,
                None => {
                    self.awaiting_key = Some(x);
                    return Ok(Cycle::AwaitingKey);
                }
            },
            LdDelayReg { x } => regs.delay_timer = regs.v[x],
            LdSoundReg { x } => regs.sound_timer = regs.v[x],
            AddI { x } => regs.i = regs.i.wrapping_add(u16::from(regs.v[x])),
            LdFont { x } => regs.i = font_sprite_addr(regs.v[x]),
            Bcd { x } => {
                let value = regs.v[x];
                self.memory.set(regs.i, value / 100)?;
                self.memory.set(regs.i.wrapping_add(1), value / 10 % 10)?;
                self.memory.set(regs.i.wrapping_add(2), value % 10)?;
            }
            Store { x } => {
                for offset in 0..=x {
                    self.memory
                        .set(regs.i.wrapping_add(offset as u16), regs.v[offset])?;
                }
            }
            Load { x } => {
                for offset in 0..=x {
                    regs.v[offset] = self.memory.get(regs.i.wrapping_add(offset as u16))?;
                }
            }
        }
        Ok(Cycle::Executed)
    }
}

impl Default for Chip8Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Chip8Error;
    use crate::instruction::Instruction::*;

    fn interpreter_with(program: &[u8]) -> Chip8Interpreter {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut i = Chip8Interpreter::new();
        i.load_program_bytes(program).unwrap();
        i
    }

    #[test]
    fn test_load_points_pc_at_program() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.pc = 0x400;
        i.load_program_bytes(&[0x00, 0xe0])?;
        assert_eq!(i.registers.pc, 0x200);
        Ok(())
    }

    #[test]
    fn test_load_from_reader() -> io::Result<()> {
        let mut i = Chip8Interpreter::new();
        let mut prog: &[u8] = &[0x60, 0xff];
        i.load_program(&mut prog)?;
        assert_eq!(i.memory.get(0x200).unwrap(), 0x60);
        Ok(())
    }

    #[test]
    fn test_add_with_carry_flag_law() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        for a in [0u8, 1, 0x0f, 0x7f, 0x80, 0xfe, 0xff] {
            for b in [0u8, 1, 0x10, 0x7f, 0x80, 0xff] {
                i.registers.v[0] = a;
                i.registers.v[1] = b;
                i.execute(AddReg { x: 0, y: 1 })?;
                let wide = u16::from(a) + u16::from(b);
                assert_eq!(i.registers.v[0], (wide & 0xff) as u8, "{a} + {b}");
                assert_eq!(i.registers.v[VF], u8::from(wide > 0xff), "{a} + {b}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_sub_flag_is_pretruncation_compare() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        for (a, b) in [(9u8, 5u8), (5, 9), (7, 7), (0, 1), (0xff, 0)] {
            i.registers.v[2] = a;
            i.registers.v[3] = b;
            i.execute(Sub { x: 2, y: 3 })?;
            assert_eq!(i.registers.v[2], a.wrapping_sub(b), "{a} - {b}");
            assert_eq!(i.registers.v[VF], u8::from(a > b), "{a} - {b}");
        }
        Ok(())
    }

    #[test]
    fn test_subn_flag_is_reverse_compare() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.v[0] = 3;
        i.registers.v[1] = 10;
        i.execute(Subn { x: 0, y: 1 })?;
        assert_eq!(i.registers.v[0], 7);
        assert_eq!(i.registers.v[VF], 1);

        i.registers.v[0] = 10;
        i.registers.v[1] = 3;
        i.execute(Subn { x: 0, y: 1 })?;
        assert_eq!(i.registers.v[0], 0xf9);
        assert_eq!(i.registers.v[VF], 0);
        Ok(())
    }

    #[test]
    fn test_shifts_capture_ejected_bit() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.v[4] = 0b0000_0101;
        i.execute(Shr { x: 4 })?;
        assert_eq!(i.registers.v[4], 0b0000_0010);
        assert_eq!(i.registers.v[VF], 1);
        i.execute(Shr { x: 4 })?;
        assert_eq!(i.registers.v[VF], 0);

        i.registers.v[4] = 0b1100_0000;
        i.execute(Shl { x: 4 })?;
        assert_eq!(i.registers.v[4], 0b1000_0000);
        assert_eq!(i.registers.v[VF], 1);
        i.registers.v[4] = 0b0100_0000;
        i.execute(Shl { x: 4 })?;
        assert_eq!(i.registers.v[VF], 0);
        Ok(())
    }

    #[test]
    fn test_logic_ops() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.v[0] = 0b1010;
        i.registers.v[1] = 0b0110;
        i.execute(Or { x: 0, y: 1 })?;
        assert_eq!(i.registers.v[0], 0b1110);
        i.execute(And { x: 0, y: 1 })?;
        assert_eq!(i.registers.v[0], 0b0110);
        i.execute(Xor { x: 0, y: 1 })?;
        assert_eq!(i.registers.v[0], 0);
        Ok(())
    }

    #[test]
    fn test_immediate_add_sets_no_flag() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.v[0] = 0xff;
        i.registers.v[VF] = 0;
        i.execute(AddByte { x: 0, kk: 2 })?;
        assert_eq!(i.registers.v[0], 1);
        // 7xkk truncates without touching VF
        assert_eq!(i.registers.v[VF], 0);
        Ok(())
    }

    // the end-to-end scenario: load 5, load 3, add, clear screen
    #[test]
    fn test_arithmetic_program() -> Result<()> {
        let mut i = interpreter_with(&[0x60, 0x05, 0x61, 0x03, 0x80, 0x14, 0x00, 0xe0]);
        i.framebuffer.set(10, 10, true);

        for _ in 0..3 {
            assert_eq!(i.step()?, Cycle::Executed);
        }
        assert_eq!(i.registers.v[0], 8);
        assert_eq!(i.registers.v[1], 3);
        assert_eq!(i.registers.v[VF], 0);
        assert_eq!(i.registers.pc, 0x206);

        i.step()?;
        assert!(!i.framebuffer.test(10, 10));
        Ok(())
    }

    #[test]
    fn test_call_then_return() -> Result<()> {
        let mut i = interpreter_with(&[0x23, 0x00]); // CALL 0x300
        i.memory.set(0x300, 0x00)?;
        i.memory.set(0x301, 0xee)?; // RET

        i.step()?;
        assert_eq!(i.registers.pc, 0x300);
        assert_eq!(i.stack.depth(), 1);

        i.step()?;
        assert_eq!(i.registers.pc, 0x202);
        assert_eq!(i.stack.depth(), 0);
        Ok(())
    }

    #[test]
    fn test_return_on_empty_stack_is_fatal() {
        let mut i = interpreter_with(&[0x00, 0xee]);
        assert_eq!(i.step(), Err(Chip8Error::StackUnderflow));
    }

    #[test]
    fn test_deep_recursion_overflows() -> Result<()> {
        // CALL 0x200 forever: each cycle pushes another frame
        let mut i = interpreter_with(&[0x22, 0x00]);
        for _ in 0..16 {
            i.step()?;
        }
        assert_eq!(i.step(), Err(Chip8Error::StackOverflow));
        Ok(())
    }

    #[test]
    fn test_skip_equal_immediate() -> Result<()> {
        let mut i = interpreter_with(&[0x30, 0x42]);
        i.registers.v[0] = 0x42;
        i.step()?;
        assert_eq!(i.registers.pc, 0x204);
        Ok(())
    }

    #[test]
    fn test_skip_not_taken_advances_normally() -> Result<()> {
        let mut i = interpreter_with(&[0x30, 0x42]);
        i.registers.v[0] = 0x41;
        i.step()?;
        assert_eq!(i.registers.pc, 0x202);
        Ok(())
    }

    // each skip condition is independent; a failed 4xkk must not bleed into
    // the register-compare skip that happens to follow it
    #[test]
    fn test_skip_not_equal_immediate_is_independent() -> Result<()> {
        let mut i = interpreter_with(&[0x40, 0x07, 0x51, 0x20]);
        i.registers.v[0] = 0x07; // condition false: no skip
        i.registers.v[1] = 0;
        i.registers.v[2] = 0;
        i.step()?;
        assert_eq!(i.registers.pc, 0x202);
        // the following 5xy0 still evaluates on its own terms
        i.step()?;
        assert_eq!(i.registers.pc, 0x206);
        Ok(())
    }

    #[test]
    fn test_skip_register_compare() -> Result<()> {
        let mut i = interpreter_with(&[0x50, 0x10, 0x90, 0x10]);
        i.registers.v[0] = 5;
        i.registers.v[1] = 5;
        i.step()?; // 5xy0 skips
        assert_eq!(i.registers.pc, 0x206);

        let mut i = interpreter_with(&[0x90, 0x10]);
        i.registers.v[0] = 5;
        i.registers.v[1] = 6;
        i.step()?; // 9xy0 skips
        assert_eq!(i.registers.pc, 0x204);
        Ok(())
    }

    #[test]
    fn test_jump_and_jump_with_offset() -> Result<()> {
        let mut i = interpreter_with(&[0x1a, 0xbc]);
        i.step()?;
        assert_eq!(i.registers.pc, 0xabc);

        let mut i = interpreter_with(&[0xb3, 0x00]);
        i.registers.v[0] = 0x21;
        i.step()?;
        assert_eq!(i.registers.pc, 0x321);
        Ok(())
    }

    #[test]
    fn test_random_respects_mask() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.execute(Rnd { x: 5, kk: 0x00 })?;
        assert_eq!(i.registers.v[5], 0);
        for _ in 0..32 {
            i.execute(Rnd { x: 5, kk: 0x0f })?;
            assert_eq!(i.registers.v[5] & 0xf0, 0);
        }
        Ok(())
    }

    #[test]
    fn test_draw_reports_collision_in_vf() -> Result<()> {
        let mut i = interpreter_with(&[0xd0, 0x12, 0xd0, 0x12]); // DRW V0,V1,2 twice
        i.registers.i = 0x000; // glyph 0: rows f0 90
        i.registers.v[0] = 4;
        i.registers.v[1] = 6;

        i.step()?;
        assert_eq!(i.registers.v[VF], 0);
        assert!(i.framebuffer.test(4, 6));

        // second identical draw erases the sprite and flags the collision
        i.step()?;
        assert_eq!(i.registers.v[VF], 1);
        assert!(!i.framebuffer.test(4, 6));
        Ok(())
    }

    #[test]
    fn test_draw_sprite_out_of_memory_is_fatal() {
        let mut i = interpreter_with(&[0xd0, 0x15]);
        i.registers.i = 0x0ffe; // 5 rows from here run off the end
        assert!(matches!(
            i.step(),
            Err(Chip8Error::OutOfBoundsAccess { .. })
        ));
    }

    #[test]
    fn test_skip_on_key_state() -> Result<()> {
        let mut i = interpreter_with(&[0xe0, 0x9e, 0xe0, 0xa1]);
        i.registers.v[0] = 0x07;
        i.keyboard.set_pressed(0x07);
        i.step()?; // SKP taken
        assert_eq!(i.registers.pc, 0x204);
        i.step()?; // SKNP not taken: key still down
        assert_eq!(i.registers.pc, 0x206);
        Ok(())
    }

    #[test]
    fn test_wait_for_key_parks_then_resumes() -> Result<()> {
        let mut i = interpreter_with(&[0xf3, 0x0a, 0x00, 0xe0]);

        assert_eq!(i.step()?, Cycle::AwaitingKey);
        assert_eq!(i.step()?, Cycle::AwaitingKey);

        i.keyboard_mut().set_pressed(0x0b);
        assert_eq!(i.step()?, Cycle::Executed);
        assert_eq!(i.registers.v[3], 0x0b);

        // next cycle carries on with the following instruction
        i.step()?;
        assert_eq!(i.registers.pc, 0x204);
        Ok(())
    }

    #[test]
    fn test_wait_for_key_immediate_when_key_down() -> Result<()> {
        let mut i = interpreter_with(&[0xf3, 0x0a]);
        i.keyboard_mut().set_pressed(0x02);
        assert_eq!(i.step()?, Cycle::Executed);
        assert_eq!(i.registers.v[3], 0x02);
        Ok(())
    }

    #[test]
    fn test_timer_instructions() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.v[6] = 42;
        i.execute(LdDelayReg { x: 6 })?;
        assert_eq!(i.registers.delay_timer, 42);
        i.execute(LdRegDelay { x: 7 })?;
        assert_eq!(i.registers.v[7], 42);

        i.execute(LdSoundReg { x: 6 })?;
        assert!(i.sound_active());
        i.clear_sound_timer();
        assert!(!i.sound_active());
        Ok(())
    }

    #[test]
    fn test_index_register_family() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.execute(LdI { nnn: 0x345 })?;
        assert_eq!(i.registers.i, 0x345);
        i.registers.v[2] = 0x10;
        i.execute(AddI { x: 2 })?;
        assert_eq!(i.registers.i, 0x355);

        i.registers.v[0] = 0x0a;
        i.execute(LdFont { x: 0 })?;
        assert_eq!(i.registers.i, 0x0a * 5);
        // first row of the A glyph
        assert_eq!(i.memory.get(i.registers.i)?, 0xf0);
        Ok(())
    }

    #[test]
    fn test_bcd_decomposition() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        i.registers.v[0] = 157;
        i.registers.i = 0x400;
        i.execute(Bcd { x: 0 })?;
        assert_eq!(i.memory.get_ro_slice(0x400, 3)?, &[1, 5, 7]);

        i.registers.v[0] = 9;
        i.execute(Bcd { x: 0 })?;
        assert_eq!(i.memory.get_ro_slice(0x400, 3)?, &[0, 0, 9]);
        Ok(())
    }

    #[test]
    fn test_block_store_and_load() -> Result<()> {
        let mut i = Chip8Interpreter::new();
        for n in 0..4u8 {
            i.registers.v[usize::from(n)] = 0x10 + n;
        }
        i.registers.i = 0x500;
        i.execute(Store { x: 3 })?;
        assert_eq!(i.memory.get_ro_slice(0x500, 4)?, &[0x10, 0x11, 0x12, 0x13]);
        // the index register is left where it was
        assert_eq!(i.registers.i, 0x500);

        let mut j = Chip8Interpreter::new();
        j.registers.i = 0x500;
        for n in 0..4u16 {
            j.memory.set(0x500 + n, 0x20 + n as u8)?;
        }
        j.execute(Load { x: 3 })?;
        assert_eq!(j.registers.v[..4], [0x20, 0x21, 0x22, 0x23]);
        assert_eq!(j.registers.v[4], 0);
        assert_eq!(j.registers.i, 0x500);
        Ok(())
    }

    #[test]
    fn test_block_store_past_end_is_fatal() {
        let mut i = Chip8Interpreter::new();
        i.registers.i = 0x0ffe;
        assert!(matches!(
            i.execute(Store { x: 3 }),
            Err(Chip8Error::OutOfBoundsAccess { .. })
        ));
    }

    #[test]
    fn test_unknown_word_is_a_no_op() -> Result<()> {
        let mut i = interpreter_with(&[0xf0, 0xff, 0x60, 0x07]);
        assert_eq!(i.step()?, Cycle::Executed);
        assert_eq!(i.registers.pc, 0x202);
        i.step()?;
        assert_eq!(i.registers.v[0], 0x07);
        Ok(())
    }

    #[test]
    fn test_sys_is_a_no_op() -> Result<()> {
        let mut i = interpreter_with(&[0x03, 0x45]);
        i.step()?;
        assert_eq!(i.registers.pc, 0x202);
        Ok(())
    }

    #[test]
    fn test_fetch_past_end_of_memory_is_fatal() -> Result<()> {
        let mut i = interpreter_with(&[0x1f, 0xff]); // JP 0xfff
        i.step()?;
        assert_eq!(
            i.step(),
            Err(Chip8Error::OutOfBoundsAccess { address: 0x1000 })
        );
        Ok(())
    }
}
