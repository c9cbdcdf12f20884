use thiserror::Error;

/// Faults that end the current VM instance. Unknown opcodes are deliberately
/// not here: they execute as no-ops (see `interpreter`), because real CHIP-8
/// programs lean on the original interpreter ignoring encodings it doesn't
/// recognise.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Chip8Error {
    /// a memory address beyond the 4K capacity; misbehaving programs must
    /// fault rather than corrupt unrelated state
    #[error("memory access out of bounds at {address:#06x}")]
    OutOfBoundsAccess { address: u16 },

    /// CALL nested deeper than the stack allows
    #[error("stack overflow: call depth exceeds {depth} frames", depth = crate::stack::CHIP8_STACK_DEPTH)]
    StackOverflow,

    /// RET with no frame to return to
    #[error("stack underflow: return with empty call stack")]
    StackUnderflow,

    /// program image doesn't fit between the load address and end of memory
    #[error("program too large: {size} bytes, {capacity} available")]
    ProgramTooLarge { size: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
