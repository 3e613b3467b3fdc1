//! The ordered flag registry.

use crate::{ConfigError, FlagSpec, validate_spec};

/// Ordered, append-only collection of flag declarations.
///
/// Declaration order matters only as the tie-break for positional
/// assignment: the first-declared eligible positional receives an
/// unmatched token. The registry is built once, then treated as
/// read-only; evaluation never mutates it, so one registry may serve
/// any number of concurrent evaluations.
///
/// Duplicate ids are not detected — callers are responsible for
/// uniqueness. If two declarations share an id, result-map entries
/// collapse and the first-registered declaration wins during matching.
///
/// # Examples
///
/// ```
/// use flagline_core::{FlagSpec, Registry};
///
/// let mut registry = Registry::new();
/// registry.register(FlagSpec::new("verbose").with_tag("v", "-")).unwrap();
/// registry.register(FlagSpec::new("files").multiple()).unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("files").is_some());
/// assert!(registry.get("quiet").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    specs: Vec<FlagSpec>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a declaration, preserving order.
    ///
    /// Fails with the first [`ConfigError`] reported by
    /// [`validate_spec`]; the declaration is not appended on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagline_core::{ConfigError, FlagSpec, Registry};
    ///
    /// let mut registry = Registry::new();
    /// let err = registry
    ///     .register(FlagSpec::new("files").multiple().consumes(2))
    ///     .unwrap_err();
    /// assert!(matches!(err, ConfigError::ConflictingPositional(_)));
    /// assert!(registry.is_empty());
    /// ```
    pub fn register(&mut self, spec: FlagSpec) -> Result<(), ConfigError> {
        if let Some(err) = validate_spec(&spec).into_iter().next() {
            return Err(err);
        }
        self.specs.push(spec);
        Ok(())
    }

    /// All declarations in registration order.
    pub fn specs(&self) -> &[FlagSpec] {
        &self.specs
    }

    /// Finds a declaration by id (first-registered wins).
    pub fn get(&self, id: &str) -> Option<&FlagSpec> {
        self.specs.iter().find(|s| s.id == id)
    }

    /// Number of registered declarations.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no declarations are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_order() {
        let mut registry = Registry::new();
        registry.register(FlagSpec::new("first")).unwrap();
        registry.register(FlagSpec::new("second").with_tag("s", "-")).unwrap();
        registry.register(FlagSpec::new("third")).unwrap();

        let ids: Vec<&str> = registry.specs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_register_rejects_invalid_spec() {
        let mut registry = Registry::new();
        let err = registry.register(FlagSpec::new("")).unwrap_err();
        assert_eq!(err, ConfigError::EmptyId);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_returns_first_registered_on_duplicate_id() {
        let mut registry = Registry::new();
        registry
            .register(FlagSpec::new("out").with_tag("o", "-"))
            .unwrap();
        registry
            .register(FlagSpec::new("out").with_tag("output", "--"))
            .unwrap();

        let spec = registry.get("out").unwrap();
        assert_eq!(spec.tags[0].composed(), "-o");
    }
}
