//! An embeddable CHIP-8 execution core: memory, registers, call stack,
//! timers, keyboard state and the XOR-composited framebuffer, driven by a
//! single-instruction-per-call interpreter cycle.
//!
//! ## Design
//!
//! * the crate is the engine only; display, audio, input polling and the
//!   program loader are the host's problem
//! * one `Chip8Interpreter` value owns one machine; nothing is shared, so
//!   run as many independent VMs as you like
//! * the host loop drives everything:
//!    - `step()` executes exactly one instruction
//!    - `tick_timers()` at the host's cadence, conventionally 60Hz
//!    - read the framebuffer each frame via `test(x, y)`
//!    - feed key transitions through `keyboard_mut()`; physical codes go
//!      through the keymap, unmapped codes are ignored
//!    - `sound_active()` says whether to emit a tone
//! * FX0A never blocks: `step()` reports `Cycle::AwaitingKey` so the host
//!   can keep rendering and polling while the program waits
//! * address and stack faults are typed errors and end the instance; the
//!   host decides whether to reset or reload
//!
//! ```
//! use chip8_core::{Chip8Interpreter, Cycle};
//!
//! let mut vm = Chip8Interpreter::new();
//! // LD V0, 0x05 / LD V1, 0x03 / ADD V0, V1
//! vm.load_program_bytes(&[0x60, 0x05, 0x61, 0x03, 0x80, 0x14]).unwrap();
//! for _ in 0..3 {
//!     assert_eq!(vm.step().unwrap(), Cycle::Executed);
//! }
//! assert_eq!(vm.registers().v[0], 8);
//! ```

pub mod error;
pub mod framebuffer;
pub mod instruction;
pub mod interpreter;
pub mod keyboard;
pub mod memory;
pub mod registers;
pub mod stack;

pub use error::{Chip8Error, Result};
pub use framebuffer::{Chip8Framebuffer, CHIP8_HEIGHT, CHIP8_WIDTH};
pub use instruction::Instruction;
pub use interpreter::{Chip8Interpreter, Cycle};
pub use keyboard::{Chip8Keyboard, CHIP8_TOTAL_KEYS};
pub use memory::{Chip8Memory, CHIP8_PROGRAM_ADDR, CHIP8_RAM_SIZE_BYTES};
pub use registers::{Chip8Registers, VF};
pub use stack::{Chip8Stack, CHIP8_STACK_DEPTH};
