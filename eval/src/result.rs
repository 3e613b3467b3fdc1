//! The evaluation result container.

use std::collections::BTreeMap;

use serde::Serialize;

/// Result of one evaluation call.
///
/// Stores the toggle state and captured values for every flag id, plus
/// the id of the abort flag if one short-circuited the parse. Created
/// fresh per call, populated by the engine, and returned by value;
/// mutation is crate-internal.
///
/// Unseen ids answer with neutral values: `state` is `false`, `values`
/// is empty, `last_value` is `None`. "No value captured" is never
/// conflated with "empty string captured".
///
/// The container serializes to JSON/YAML; `BTreeMap` keys keep the
/// rendered output stable.
///
/// # Examples
///
/// ```
/// use flagline_eval::Evaluation;
///
/// let eval = Evaluation::default();
/// assert!(!eval.state("verbose"));
/// assert!(eval.values("inputs").is_empty());
/// assert_eq!(eval.last_value("out"), None);
/// assert!(!eval.aborted());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Evaluation {
    states: BTreeMap<String, bool>,
    params: BTreeMap<String, Vec<String>>,
    aborted_by: Option<String>,
}

impl Evaluation {
    /// Toggle state of a flag; `false` if the id was never seen.
    pub fn state(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(false)
    }

    /// All values captured for a flag, in order of appearance.
    pub fn values(&self, id: &str) -> &[String] {
        self.params.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The most recently captured value, if any.
    pub fn last_value(&self, id: &str) -> Option<&str> {
        self.params
            .get(id)
            .and_then(|v| v.last().map(String::as_str))
    }

    /// Whether at least one value was recorded for the id.
    pub fn captured(&self, id: &str) -> bool {
        self.params.get(id).is_some_and(|v| !v.is_empty())
    }

    /// Whether an abort flag short-circuited the parse.
    pub fn aborted(&self) -> bool {
        self.aborted_by.is_some()
    }

    /// Id of the abort flag that ended evaluation, if any.
    pub fn aborted_by(&self) -> Option<&str> {
        self.aborted_by.as_deref()
    }
}

impl Evaluation {
    pub(crate) fn set_state(&mut self, id: &str, state: bool) {
        self.states.insert(id.to_string(), state);
    }

    pub(crate) fn add_value(&mut self, id: &str, value: &str) {
        self.params
            .entry(id.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn clear_values(&mut self, id: &str) {
        if let Some(values) = self.params.get_mut(id) {
            values.clear();
        }
    }

    pub(crate) fn set_abort(&mut self, id: &str) {
        self.aborted_by = Some(id.to_string());
    }
}
