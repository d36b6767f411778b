//! The stacksim virtual machine — a small simulated stack computer.
//!
//! The machine owns:
//! - A fixed-capacity, address-indexed instruction memory
//! - A growable LIFO data stack of 32-bit signed values
//! - An output buffer filled by PRINT
//!
//! Programs are written into memory through the validating loader (the
//! fluent `set_address`/`insert` pair, or `load` for record batches), then
//! run with `execute`, which starts at the lowest occupied address and
//! halts on STOP or on the first empty slot.
//!
//! # Usage
//!
//! ```
//! use stacksim_common::{Opcode, Program, ProgramEntry};
//! use stacksim_vm::Machine;
//!
//! let program = Program::new(vec![
//!     ProgramEntry::with_operand(0, Opcode::Push, 42),
//!     ProgramEntry::new(1, Opcode::Print),
//!     ProgramEntry::new(2, Opcode::Stop),
//! ]);
//!
//! let mut machine = Machine::new(100);
//! machine.load(&program).unwrap();
//! assert_eq!(machine.execute().unwrap(), "42\n");
//! ```

pub mod error;
pub mod execute;
pub mod loader;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{Machine, DEFAULT_MEMORY_SIZE};
