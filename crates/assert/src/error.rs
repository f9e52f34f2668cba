//! Error types for assertion misuse

use thiserror::Error;

/// A custom failure message that cannot be rendered.
///
/// This signals a mistake by the test author, not a failed expectation, so
/// it is never routed through a [`Sink`](crate::Sink).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("message template has more placeholders than the {supplied} argument(s) supplied")]
    MissingArguments { supplied: usize },

    #[error("message template uses {used} of the {supplied} argument(s) supplied")]
    UnusedArguments { used: usize, supplied: usize },

    #[error("message template has an unmatched `{brace}` at byte {position}")]
    UnmatchedBrace { brace: char, position: usize },
}
