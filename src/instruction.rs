//! Decode of the 16-bit instruction word into a tagged variant, so the
//! bit-field extraction can be tested apart from execution. Canonical
//! fields: family (top nibble), `x` (second nibble), `y` (third nibble),
//! `n` (fourth nibble), `kk` (low byte), `nnn` (low 12 bits).

/// One decoded chip-8 instruction. Register operands are plain indices into
/// the V file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// 0nnn: machine-language routine on the original hardware; ignored
    Sys { nnn: u16 },
    /// 00E0: clear the screen
    Cls,
    /// 00EE: return from subroutine
    Ret,
    /// 1nnn: jump to nnn
    Jp { nnn: u16 },
    /// 2nnn: call subroutine at nnn
    Call { nnn: u16 },
    /// 3xkk: skip next instruction if Vx == kk
    SeByte { x: usize, kk: u8 },
    /// 4xkk: skip next instruction if Vx != kk
    SneByte { x: usize, kk: u8 },
    /// 5xy0: skip next instruction if Vx == Vy
    SeReg { x: usize, y: usize },
    /// 6xkk: load kk into Vx
    LdByte { x: usize, kk: u8 },
    /// 7xkk: add kk to Vx, no carry flag
    AddByte { x: usize, kk: u8 },
    /// 8xy0: copy Vy into Vx
    LdReg { x: usize, y: usize },
    /// 8xy1: Vx |= Vy
    Or { x: usize, y: usize },
    /// 8xy2: Vx &= Vy
    And { x: usize, y: usize },
    /// 8xy3: Vx ^= Vy
    Xor { x: usize, y: usize },
    /// 8xy4: Vx += Vy, VF = carry out
    AddReg { x: usize, y: usize },
    /// 8xy5: Vx -= Vy, VF = (Vx > Vy) before the subtract
    Sub { x: usize, y: usize },
    /// 8xy6: Vx >>= 1, VF = the bit shifted out
    Shr { x: usize },
    /// 8xy7: Vx = Vy - Vx, VF = (Vy > Vx) before the subtract
    Subn { x: usize, y: usize },
    /// 8xyE: Vx <<= 1, VF = the bit shifted out
    Shl { x: usize },
    /// 9xy0: skip next instruction if Vx != Vy
    SneReg { x: usize, y: usize },
    /// Annn: load nnn into the index register
    LdI { nnn: u16 },
    /// Bnnn: jump to nnn + V0
    JpV0 { nnn: u16 },
    /// Cxkk: random byte AND kk into Vx
    Rnd { x: usize, kk: u8 },
    /// Dxyn: draw the n-row sprite at I to (Vx, Vy), VF = collision
    Drw { x: usize, y: usize, n: u8 },
    /// Ex9E: skip next instruction if the key named by Vx is down
    Skp { x: usize },
    /// ExA1: skip next instruction if the key named by Vx is up
    Sknp { x: usize },
    /// Fx07: read the delay timer into Vx
    LdRegDelay { x: usize },
    /// Fx0A: wait for a key press, store its index in Vx
    WaitKey { x: usize },
    /// Fx15: load Vx into the delay timer
    LdDelayReg { x: usize },
    /// Fx18: load Vx into the sound timer
    LdSoundReg { x: usize },
    /// Fx1E: add Vx to the index register
    AddI { x: usize },
    /// Fx29: point the index register at the glyph for the digit in Vx
    LdFont { x: usize },
    /// Fx33: write Vx as three decimal digits at I, I+1, I+2
    Bcd { x: usize },
    /// Fx55: store V0..=Vx to memory starting at I
    Store { x: usize },
    /// Fx65: load V0..=Vx from memory starting at I
    Load { x: usize },
}

impl Instruction {
    /// Decode an instruction word. Returns None for bit patterns the chip-8
    /// never assigned; the interpreter treats those as no-ops.
    pub fn decode(word: u16) -> Option<Instruction> {
        use Instruction::*;

        let x = usize::from((word >> 8) & 0x0f);
        let y = usize::from((word >> 4) & 0x0f);
        let n = (word & 0x000f) as u8;
        let kk = (word & 0x00ff) as u8;
        let nnn = word & 0x0fff;

        match word >> 12 {
            0x0 => match word {
                0x00e0 => Some(Cls),
                0x00ee => Some(Ret),
                _ => Some(Sys { nnn }),
            },
            0x1 => Some(Jp { nnn }),
            0x2 => Some(Call { nnn }),
            0x3 => Some(SeByte { x, kk }),
            0x4 => Some(SneByte { x, kk }),
            0x5 if n == 0 => Some(SeReg { x, y }),
            0x6 => Some(LdByte { x, kk }),
            0x7 => Some(AddByte { x, kk }),
            0x8 => match n {
                0x0 => Some(LdReg { x, y }),
                0x1 => Some(Or { x, y }),
                0x2 => Some(And { x, y }),
                0x3 => Some(Xor { x, y }),
                0x4 => Some(AddReg { x, y }),
                0x5 => Some(Sub { x, y }),
                0x6 => Some(Shr { x }),
                0x7 => Some(Subn { x, y }),
                0xe => Some(Shl { x }),
                _ => None,
            },
            0x9 if n == 0 => Some(SneReg { x, y }),
            0xa => Some(LdI { nnn }),
            0xb => Some(JpV0 { nnn }),
            0xc => Some(Rnd { x, kk }),
            0xd => Some(Drw { x, y, n }),
            0xe => match kk {
                0x9e => Some(Skp { x }),
                0xa1 => Some(Sknp { x }),
                _ => None,
            },
            0xf => match kk {
                0x07 => Some(LdRegDelay { x }),
                0x0a => Some(WaitKey { x }),
                0x15 => Some(LdDelayReg { x }),
                0x18 => Some(LdSoundReg { x }),
                0x1e => Some(AddI { x }),
                0x29 => Some(LdFont { x }),
                0x33 => Some(Bcd { x }),
                0x55 => Some(Store { x }),
                0x65 => Some(Load { x }),
                _ => None,
            },
            _ => None,
        }
    }
}
