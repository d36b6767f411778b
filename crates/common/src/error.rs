//! Load-time validation errors for stacksim instruction streams.
//!
//! Every failure that can occur while writing instructions into memory has
//! its own variant; collaborators branch on the variant, never on message
//! text. Messages identify the insertion cursor in effect when validation
//! failed.

use thiserror::Error;

use crate::opcode::Opcode;

/// Errors raised while validating and loading instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Opcode text is not one of the six recognized mnemonics.
    #[error("invalid opcode: {mnemonic}")]
    InvalidOpcode { mnemonic: String },

    /// Address outside `0..memory_size`, from `set_address` or a CALL operand.
    #[error("invalid address {addr} at cursor {at} (memory size {memory_size})")]
    InvalidAddress {
        at: usize,
        addr: i64,
        memory_size: usize,
    },

    /// CALL or PUSH given without an operand.
    #[error("{opcode} requires an operand at cursor {at}")]
    MissingOperand { at: usize, opcode: Opcode },

    /// A no-operand opcode given with one.
    #[error("{opcode} does not take an operand at cursor {at}")]
    UnexpectedOperand { at: usize, opcode: Opcode },

    /// PUSH operand outside the 32-bit signed range.
    #[error("operand {operand} out of range at cursor {at}")]
    OperandOutOfRange { at: usize, operand: i64 },

    /// Insertion cursor ran past the end of instruction memory.
    #[error("program memory overflow at cursor {at} (memory size {memory_size})")]
    MemoryOverflow { at: usize, memory_size: usize },
}
