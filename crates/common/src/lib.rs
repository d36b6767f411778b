//! Stacksim common types.
//!
//! This crate provides the foundational data structures shared by the
//! loader, virtual machine, and assembler:
//!
//! - [`Opcode`] — the six-value instruction set (MULT, CALL, RET, STOP,
//!   PRINT, PUSH)
//! - [`Instruction`] — one loaded instruction: opcode plus optional operand
//! - [`Program`] / [`ProgramEntry`] — the ordered record list handed to the
//!   loader
//! - [`LoadError`] — every load-time validation failure
//! - [`MAX_OPERAND`] / [`MIN_OPERAND`] — the 32-bit signed bounds every
//!   stored operand and stack value must satisfy
//!
//! Collaborators validating input of their own (forms, listings) should
//! mirror [`ALL_OPCODES`], [`Opcode::requires_operand`], and the operand
//! bounds rather than hard-coding them.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

pub use error::LoadError;
pub use instruction::{Instruction, MAX_OPERAND, MIN_OPERAND};
pub use opcode::{Opcode, ALL_OPCODES};
pub use program::{Program, ProgramEntry};
