//! Error types for the stacksim assembler.

use thiserror::Error;

/// Errors produced while turning listing text into program records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// An operand-requiring opcode had no operand on its line.
    #[error("line {line}: {opcode} requires an operand")]
    MissingOperand { line: usize, opcode: &'static str },

    /// A numeric literal or address marker could not be parsed.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },
}
