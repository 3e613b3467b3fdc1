//! Evaluation engine for the flagline argument parser.
//!
//! This crate consumes a token sequence against a
//! [`Registry`](flagline_core::Registry) of declarations and produces an
//! [`Evaluation`]:
//!
//! - [`Evaluator`] — builds the tag candidate table once and evaluates
//!   any number of token sequences against it.
//! - [`evaluate`] — one-shot convenience.
//! - [`Evaluation`] — the query surface: toggle states, captured values,
//!   abort indicator.
//! - [`EvalError`] — the failure taxonomy; every failure is immediate
//!   and the caller never sees a partial result.
//!
//! # Example
//!
//! ```
//! use flagline_core::{FlagSpec, Registry};
//! use flagline_eval::evaluate;
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     FlagSpec::new("mode")
//!         .with_tag("mode", "--")
//!         .consumes(1)
//!         .allow(["fast", "slow"]),
//! ).unwrap();
//! registry.register(FlagSpec::new("files").multiple()).unwrap();
//!
//! let eval = evaluate(&registry, &["a.txt", "--mode", "slow", "b.txt"]).unwrap();
//! assert_eq!(eval.last_value("mode"), Some("slow"));
//! assert_eq!(eval.values("files"), ["a.txt", "b.txt"]);
//! ```

mod engine;
mod error;
mod matcher;
mod result;

pub use engine::{Evaluator, evaluate};
pub use error::{EvalError, Result};
pub use result::Evaluation;
