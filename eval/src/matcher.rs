//! Tag resolution.
//!
//! Maps a raw token to the unique declaration whose composed
//! `prefix + tag` equals the token exactly. Candidates are enumerated
//! once per evaluator and stable-sorted by composed length descending,
//! so a longer tag can never be shadowed by a shorter one and
//! registration order breaks length ties.

use flagline_core::Registry;

/// A successful tag resolution: which declaration matched and which
/// toggle value its tag carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagMatch {
    /// Index of the declaration in the registry.
    pub index: usize,
    /// Toggle value of the matched tag.
    pub toggle: bool,
}

#[derive(Debug)]
struct Candidate {
    index: usize,
    composed: String,
    toggle: bool,
}

/// Candidate table built once from a registry.
#[derive(Debug)]
pub(crate) struct MatchTable {
    candidates: Vec<Candidate>,
}

impl MatchTable {
    pub(crate) fn new(registry: &Registry) -> Self {
        let mut candidates: Vec<Candidate> = registry
            .specs()
            .iter()
            .enumerate()
            .flat_map(|(index, spec)| {
                spec.tags.iter().map(move |tag| Candidate {
                    index,
                    composed: tag.composed(),
                    toggle: tag.toggle,
                })
            })
            .collect();

        // Stable: equal lengths keep registration order.
        candidates.sort_by(|a, b| b.composed.len().cmp(&a.composed.len()));

        Self { candidates }
    }

    /// Resolves a token by exact equality against every composed tag.
    pub(crate) fn resolve(&self, token: &str) -> Option<TagMatch> {
        self.candidates
            .iter()
            .find(|c| c.composed == token)
            .map(|c| TagMatch {
                index: c.index,
                toggle: c.toggle,
            })
    }
}
