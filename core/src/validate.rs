//! Registration-time declaration validation.
//!
//! Catches contradictory declarations before any evaluation runs. These
//! are caller bugs, not input-data errors, which is why they surface at
//! [`Registry::register`](crate::Registry::register) rather than during
//! a parse.
//!
//! # Examples
//!
//! ```
//! use flagline_core::{FlagSpec, validate_spec};
//!
//! let ok = FlagSpec::new("files").multiple();
//! assert!(validate_spec(&ok).is_empty());
//!
//! // A positional cannot both absorb an unbounded run and consume a
//! // fixed count.
//! let bad = FlagSpec::new("files").multiple().consumes(2);
//! assert!(!validate_spec(&bad).is_empty());
//! ```

use thiserror::Error;

use crate::FlagSpec;

/// Declaration/registration errors.
///
/// Each variant describes a specific structural contradiction in a
/// [`FlagSpec`]. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Declaration id is empty or whitespace-only.
    #[error("flag id cannot be empty")]
    EmptyId,
    /// A tag literal is empty (the prefix alone would match).
    #[error("flag '{0}' declares an empty tag literal")]
    EmptyTag(String),
    /// A positional declares both `multiple` and a fixed consume count —
    /// contradictory consumption strategies.
    #[error("positional '{0}' cannot be 'multiple' and consume a fixed value count")]
    ConflictingPositional(String),
    /// `multiple` and `overwrite` are both set; `overwrite` already
    /// permits re-matching and the two disagree on what a re-match does.
    #[error("flag '{0}' cannot be 'multiple' and 'overwrite' at the same time")]
    ConflictingRepeat(String),
}

/// Validates a declaration, reporting every violation.
///
/// [`Registry::register`](crate::Registry::register) calls this and
/// fails on the first error; this function is public so callers can
/// lint a declaration set up front.
///
/// # Examples
///
/// ```
/// use flagline_core::{ConfigError, FlagSpec, validate_spec};
///
/// let bad = FlagSpec::new("out").with_tag("o", "-").multiple().overwrite();
/// let errors = validate_spec(&bad);
/// assert_eq!(errors, vec![ConfigError::ConflictingRepeat("out".to_string())]);
/// ```
pub fn validate_spec(spec: &FlagSpec) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if spec.id.trim().is_empty() {
        errors.push(ConfigError::EmptyId);
        return errors;
    }

    for tag in &spec.tags {
        if tag.text.is_empty() {
            errors.push(ConfigError::EmptyTag(spec.id.clone()));
            break;
        }
    }

    if spec.is_positional() && spec.multiple && spec.consumes > 0 {
        errors.push(ConfigError::ConflictingPositional(spec.id.clone()));
    }

    if spec.multiple && spec.overwrite {
        errors.push(ConfigError::ConflictingRepeat(spec.id.clone()));
    }

    errors
}
