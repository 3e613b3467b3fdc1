//! The evaluation engine.
//!
//! Walks a token sequence against a [`Registry`] and produces an
//! [`Evaluation`]. The engine runs in four phases: default seeding, a
//! whole-sequence abort pre-scan, the left-to-right walk distributing
//! tokens to tagged and positional declarations, and the required-flag
//! post-pass.

use std::collections::HashSet;

use tracing::debug;

use flagline_core::{FlagSpec, Registry};

use crate::error::{EvalError, Result};
use crate::matcher::MatchTable;
use crate::result::Evaluation;

/// Evaluates token sequences against one registry.
///
/// Construction builds the tag candidate table; [`evaluate`](Self::evaluate)
/// takes `&self` and holds only per-call state, so a single evaluator
/// (or registry) may serve concurrent evaluations.
///
/// # Examples
///
/// ```
/// use flagline_core::{FlagSpec, Registry};
/// use flagline_eval::Evaluator;
///
/// let mut registry = Registry::new();
/// registry.register(FlagSpec::new("verbose").with_tag("v", "-")).unwrap();
/// registry.register(
///     FlagSpec::new("out").with_tag("o", "-").consumes(1),
/// ).unwrap();
/// registry.register(FlagSpec::new("files").multiple()).unwrap();
///
/// let evaluator = Evaluator::new(&registry);
/// let eval = evaluator
///     .evaluate(&["-v", "-o", "dist", "a.txt", "b.txt"])
///     .unwrap();
///
/// assert!(eval.state("verbose"));
/// assert_eq!(eval.last_value("out"), Some("dist"));
/// assert_eq!(eval.values("files"), ["a.txt", "b.txt"]);
/// ```
#[derive(Debug)]
pub struct Evaluator<'r> {
    registry: &'r Registry,
    table: MatchTable,
}

impl<'r> Evaluator<'r> {
    /// Builds an evaluator (and its tag candidate table) for a registry.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            table: MatchTable::new(registry),
        }
    }

    /// Evaluates a token sequence.
    ///
    /// The sequence is expected to exclude the program name; callers
    /// working from the process argument vector pass
    /// `std::env::args().skip(1)`.
    ///
    /// On failure the caller receives only the error — never a
    /// partially filled result.
    pub fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Evaluation> {
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let specs = self.registry.specs();

        let mut eval = Evaluation::default();
        for spec in specs {
            eval.set_state(&spec.id, spec.default_state);
            for value in &spec.default_values {
                eval.add_value(&spec.id, value);
            }
        }

        if self.scan_abort(&tokens, &mut eval) {
            return Ok(eval);
        }

        let mut provided: HashSet<usize> = HashSet::new();
        let mut i = 0usize;

        while i < tokens.len() {
            let token = tokens[i];
            match self.table.resolve(token) {
                Some(m) => {
                    i = self.take_tagged(&tokens, i, m.index, m.toggle, &mut provided, &mut eval)?;
                }
                None => {
                    i = self.take_positional(&tokens, i, &mut provided, &mut eval)?;
                }
            }
        }

        for (index, spec) in specs.iter().enumerate() {
            if spec.required && !provided.contains(&index) {
                return Err(EvalError::MissingArgument {
                    id: spec.id.clone(),
                });
            }
        }

        Ok(eval)
    }

    /// Whole-sequence pre-scan for an abort-triggering token. On a hit
    /// the result is finalized immediately: required-flag checks are
    /// skipped entirely.
    fn scan_abort(&self, tokens: &[&str], eval: &mut Evaluation) -> bool {
        for token in tokens {
            let Some(m) = self.table.resolve(token) else {
                continue;
            };
            let spec = &self.registry.specs()[m.index];
            if !spec.abort {
                continue;
            }
            debug!(id = %spec.id, token = %token, "abort flag short-circuits evaluation");
            eval.set_abort(&spec.id);
            eval.set_state(&spec.id, m.toggle);
            if let Some(action) = &spec.action {
                action("");
            }
            return true;
        }
        false
    }

    /// Handles a token that resolved to a tag. Returns the new cursor.
    fn take_tagged(
        &self,
        tokens: &[&str],
        cursor: usize,
        index: usize,
        toggle: bool,
        provided: &mut HashSet<usize>,
        eval: &mut Evaluation,
    ) -> Result<usize> {
        let spec = &self.registry.specs()[index];
        let first_time = !provided.contains(&index);

        if !first_time && !(spec.multiple || spec.overwrite) {
            return Err(EvalError::RedundantArgument {
                id: spec.id.clone(),
            });
        }

        // Re-matches replace; a first capture replaces the seeded
        // defaults rather than appending to them.
        if spec.overwrite || (first_time && spec.consumes > 0) {
            eval.clear_values(&spec.id);
        }

        provided.insert(index);
        eval.set_state(&spec.id, toggle);
        debug!(id = %spec.id, toggle, consumes = spec.consumes, "matched tag");

        let mut i = cursor + 1;
        let remaining = tokens.len() - i;
        for _ in 0..spec.consumes {
            if i >= tokens.len() {
                return Err(EvalError::MissingValue {
                    id: spec.id.clone(),
                    expected: spec.consumes,
                    found: remaining,
                });
            }
            self.capture(spec, tokens[i], eval)?;
            i += 1;
        }
        Ok(i)
    }

    /// Routes an unmatched token to the first eligible positional.
    /// Returns the new cursor.
    fn take_positional(
        &self,
        tokens: &[&str],
        cursor: usize,
        provided: &mut HashSet<usize>,
        eval: &mut Evaluation,
    ) -> Result<usize> {
        let specs = self.registry.specs();
        let slot = specs.iter().enumerate().find(|(index, spec)| {
            spec.is_positional() && (spec.multiple || !provided.contains(index))
        });
        let Some((index, spec)) = slot else {
            return Err(EvalError::UnexpectedArgument {
                token: tokens[cursor].to_string(),
            });
        };

        let first_time = provided.insert(index);
        if first_time && (spec.multiple || spec.consumes > 0) {
            eval.clear_values(&spec.id);
        }
        eval.set_state(&spec.id, true);

        let mut i = cursor;
        if spec.multiple {
            // Greedy: absorb the run until end-of-input or the next
            // token resolves to some declared tag.
            while i < tokens.len() && self.table.resolve(tokens[i]).is_none() {
                self.capture(spec, tokens[i], eval)?;
                i += 1;
            }
            debug!(id = %spec.id, count = i - cursor, "positional absorbed run");
        } else {
            let remaining = tokens.len() - i;
            for _ in 0..spec.consumes {
                if i >= tokens.len() {
                    return Err(EvalError::MissingValue {
                        id: spec.id.clone(),
                        expected: spec.consumes,
                        found: remaining,
                    });
                }
                self.capture(spec, tokens[i], eval)?;
                i += 1;
            }
        }
        Ok(i)
    }

    /// Validates and records one value, firing the action callback.
    /// The token must not itself be a recognized tag: a value slot
    /// never silently swallows another flag's tag.
    fn capture(&self, spec: &FlagSpec, token: &str, eval: &mut Evaluation) -> Result<()> {
        if self.table.resolve(token).is_some() {
            return Err(EvalError::TokenMismatch {
                id: spec.id.clone(),
                token: token.to_string(),
            });
        }
        if !spec.permits(token) {
            return Err(EvalError::InvalidValue {
                id: spec.id.clone(),
                value: token.to_string(),
            });
        }
        if let Some(action) = &spec.action {
            action(token);
        }
        eval.add_value(&spec.id, token);
        Ok(())
    }
}

/// One-shot convenience over [`Evaluator`].
///
/// # Examples
///
/// ```
/// use flagline_core::{FlagSpec, Registry};
/// use flagline_eval::evaluate;
///
/// let mut registry = Registry::new();
/// registry.register(FlagSpec::new("help").with_tag("help", "--").abort()).unwrap();
///
/// let eval = evaluate(&registry, &["--help"]).unwrap();
/// assert_eq!(eval.aborted_by(), Some("help"));
/// ```
pub fn evaluate<S: AsRef<str>>(registry: &Registry, tokens: &[S]) -> Result<Evaluation> {
    Evaluator::new(registry).evaluate(tokens)
}
