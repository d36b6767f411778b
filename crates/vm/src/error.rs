//! Runtime errors for the stacksim machine.
//!
//! These are conditions that load-time validation cannot catch. Except for
//! `NoInstructions`, every variant carries the address (`at`) of the
//! instruction that triggered it: the program counter value just before
//! that instruction executed.

use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `execute` called on a machine whose instruction memory is empty.
    #[error("there are no instructions to execute")]
    NoInstructions,

    /// Pop on an empty data stack.
    #[error("data stack is empty at address {at}")]
    StackUnderflow { at: usize },

    /// CALL or RET targeting an address with no instruction (or outside
    /// memory entirely, for RET).
    #[error("invalid jump target {target} at address {at}")]
    InvalidJumpTarget { at: usize, target: i64 },

    /// MULT produced a value outside the 32-bit signed range.
    #[error("result {value} out of range at address {at}")]
    ResultOutOfRange { at: usize, value: i64 },
}
