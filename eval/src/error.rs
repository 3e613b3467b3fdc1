//! Error types for argument evaluation.
//!
//! Every variant is an immediate, non-recoverable parse failure: the
//! caller receives the error and no partial result. Registration-time
//! failures are a separate concern and live in `flagline-core` as
//! `ConfigError`.

use thiserror::Error;

/// Errors raised while evaluating a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `required` flag or positional never appeared.
    #[error("required flag '{id}' was not provided")]
    MissingArgument {
        /// Id of the missing declaration.
        id: String,
    },

    /// A flag needed more values than remained in the input.
    #[error("flag '{id}' expects {expected} value(s) but only {found} remained")]
    MissingValue {
        /// Id of the starved declaration.
        id: String,
        /// Number of values the declaration consumes.
        expected: usize,
        /// Number of values actually available.
        found: usize,
    },

    /// A captured value is outside the configured allow-list.
    #[error("value '{value}' is not allowed for flag '{id}'")]
    InvalidValue {
        /// Id of the declaration that rejected the value.
        id: String,
        /// The offending token.
        value: String,
    },

    /// A token matched no tag and no eligible positional could take it.
    #[error("unexpected argument '{token}'")]
    UnexpectedArgument {
        /// The unplaceable token.
        token: String,
    },

    /// A non-`multiple` tagged flag appeared more than once.
    #[error("flag '{id}' was provided more than once")]
    RedundantArgument {
        /// Id of the repeated declaration.
        id: String,
    },

    /// A value slot's next token was itself a recognized tag; a value
    /// slot never silently swallows another flag's tag.
    #[error("flag '{id}' expected a value but found tag '{token}'")]
    TokenMismatch {
        /// Id of the declaration whose value slot was interrupted.
        id: String,
        /// The tag token found in the value slot.
        token: String,
    },
}

/// Convenience alias for results with [`EvalError`].
pub type Result<T> = std::result::Result<T, EvalError>;
