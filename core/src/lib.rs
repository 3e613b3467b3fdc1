//! Core declaration types for the flagline argument parser.
//!
//! This crate defines the data model a program uses to declare its
//! command line:
//!
//! - [`FlagSpec`] — one flag declaration: tags, value arity, allow-list,
//!   defaults, and behavioral modifiers (required/multiple/abort/
//!   overwrite).
//! - [`TagSpec`] — one literal tag (prefix + text + toggle value).
//! - [`Registry`] — the ordered collection of declarations a token
//!   sequence is evaluated against.
//!
//! Validation ([`validate_spec`]) catches contradictory declarations at
//! registration time, before any evaluation runs.
//!
//! Evaluation itself lives in the `flagline-eval` crate.
//!
//! # Example
//!
//! ```
//! use flagline_core::{FlagSpec, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     FlagSpec::new("help").with_tag("h", "-").with_tag("help", "--").abort(),
//! ).unwrap();
//! registry.register(
//!     FlagSpec::new("mode")
//!         .with_tag("mode", "--")
//!         .consumes(1)
//!         .allow(["fast", "slow"])
//!         .default_values(["fast"]),
//! ).unwrap();
//! registry.register(FlagSpec::new("inputs").multiple()).unwrap();
//!
//! assert_eq!(registry.len(), 3);
//! assert!(registry.get("mode").unwrap().permits("slow"));
//! ```

mod registry;
mod types;
mod validate;

pub use registry::Registry;
pub use types::{Action, FlagSpec, TagSpec};
pub use validate::{ConfigError, validate_spec};
