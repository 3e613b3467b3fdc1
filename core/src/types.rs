//! Flag declaration types.
//!
//! This module defines the data model for declaring flags: tagged
//! switches, value-consuming options, and positionals. Declarations are
//! plain data built with chained `with_*` style methods; no validation
//! happens until the declaration is handed to a
//! [`Registry`](crate::Registry).

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Callback invoked once per captured value (and once with `""` when an
/// abort flag fires). Purely observational; it must not assume it can
/// influence the parse.
pub type Action = Arc<dyn Fn(&str) + Send + Sync>;

/// One literal tag a flag responds to.
///
/// A tag is matched against raw tokens by exact equality of the composed
/// `prefix + text` string, never by prefix matching of the token itself.
///
/// # Examples
///
/// ```
/// use flagline_core::TagSpec;
///
/// let tag = TagSpec::new("verbose", "--", true);
/// assert_eq!(tag.composed(), "--verbose");
/// assert!(tag.toggle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSpec {
    /// Literal tag text (e.g., "v")
    pub text: String,
    /// Prefix string the tag is composed with (e.g., "-")
    pub prefix: String,
    /// Toggle value recorded when this tag matches
    pub toggle: bool,
}

impl TagSpec {
    /// Creates a tag with the given text, prefix, and toggle value.
    pub fn new(text: &str, prefix: &str, toggle: bool) -> Self {
        Self {
            text: text.to_string(),
            prefix: prefix.to_string(),
            toggle,
        }
    }

    /// Returns the fully composed token this tag matches (`prefix + text`).
    pub fn composed(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }
}

/// Declaration of a single flag or positional.
///
/// A declaration with no tags is a *positional*: it is matched by
/// elimination when a token resolves to no declared tag. A declaration
/// with one or more tags is *tagged* and matched by exact token
/// equality.
///
/// Build declarations with [`FlagSpec::new`] and the chained builder
/// methods, then hand them to [`Registry::register`](crate::Registry::register),
/// which enforces the structural invariants.
///
/// # Examples
///
/// ```
/// use flagline_core::FlagSpec;
///
/// // A toggle responding to -v and --verbose
/// let verbose = FlagSpec::new("verbose")
///     .with_tag("v", "-")
///     .with_tag("verbose", "--");
/// assert!(!verbose.is_positional());
/// assert_eq!(verbose.consumes, 0);
///
/// // A required option taking one allow-listed value
/// let mode = FlagSpec::new("mode")
///     .with_tag("mode", "--")
///     .consumes(1)
///     .allow(["fast", "slow"])
///     .required();
/// assert!(mode.required);
/// assert_eq!(mode.allowed, vec!["fast", "slow"]);
///
/// // An unbounded positional
/// let inputs = FlagSpec::new("inputs").multiple();
/// assert!(inputs.is_positional());
/// ```
#[derive(Clone, Serialize)]
pub struct FlagSpec {
    /// Unique identifying string; key for all result lookups
    pub id: String,
    /// Tags this flag responds to, in declaration order. Empty = positional
    pub tags: Vec<TagSpec>,
    /// How many subsequent tokens are pulled as values on a match (0 = pure toggle)
    pub consumes: usize,
    /// Allow-list of permitted values; empty = unrestricted
    pub allowed: Vec<String>,
    /// Toggle state seeded into the result before any token is processed
    pub default_state: bool,
    /// Values seeded into the result before any token is processed
    pub default_values: Vec<String>,
    /// Must appear at least once
    pub required: bool,
    /// May appear more than once; an unbounded positional absorbs a run of tokens
    pub multiple: bool,
    /// Presence anywhere in the input terminates evaluation immediately
    pub abort: bool,
    /// Re-matching replaces previously captured values instead of appending
    pub overwrite: bool,
    /// Observational per-value callback
    #[serde(skip)]
    pub action: Option<Action>,
}

impl fmt::Debug for FlagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSpec")
            .field("id", &self.id)
            .field("tags", &self.tags)
            .field("consumes", &self.consumes)
            .field("allowed", &self.allowed)
            .field("default_state", &self.default_state)
            .field("default_values", &self.default_values)
            .field("required", &self.required)
            .field("multiple", &self.multiple)
            .field("abort", &self.abort)
            .field("overwrite", &self.overwrite)
            .field("action", &self.action.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl FlagSpec {
    /// Creates a bare declaration with the given id.
    ///
    /// Until tags are added the declaration is a positional.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagline_core::FlagSpec;
    ///
    /// let spec = FlagSpec::new("files");
    /// assert!(spec.is_positional());
    /// assert!(!spec.required);
    /// ```
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            tags: Vec::new(),
            consumes: 0,
            allowed: Vec::new(),
            default_state: false,
            default_values: Vec::new(),
            required: false,
            multiple: false,
            abort: false,
            overwrite: false,
            action: None,
        }
    }

    /// Adds a tag with toggle value `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagline_core::FlagSpec;
    ///
    /// let spec = FlagSpec::new("verbose").with_tag("v", "-");
    /// assert_eq!(spec.tags[0].composed(), "-v");
    /// assert!(spec.tags[0].toggle);
    /// ```
    pub fn with_tag(mut self, text: &str, prefix: &str) -> Self {
        self.tags.push(TagSpec::new(text, prefix, true));
        self
    }

    /// Adds a tag recording an explicit toggle value, for "negative"
    /// tags such as `--no-color` toggling a `color` id off.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagline_core::FlagSpec;
    ///
    /// let spec = FlagSpec::new("color")
    ///     .with_tag("color", "--")
    ///     .with_toggle("no-color", "--", false)
    ///     .default_state(true);
    /// assert!(!spec.tags[1].toggle);
    /// ```
    pub fn with_toggle(mut self, text: &str, prefix: &str, value: bool) -> Self {
        self.tags.push(TagSpec::new(text, prefix, value));
        self
    }

    /// Sets how many subsequent tokens are consumed as values on a match.
    pub fn consumes(mut self, n: usize) -> Self {
        self.consumes = n;
        self
    }

    /// Restricts captured values to the given allow-list.
    pub fn allow<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }

    /// Pre-seeds the toggle state reported when the flag never matches.
    pub fn default_state(mut self, state: bool) -> Self {
        self.default_state = state;
        self
    }

    /// Pre-seeds values reported when the flag never captures any.
    ///
    /// The first real capture replaces these; it never appends to them.
    pub fn default_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the flag as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allows the flag to appear more than once. For a positional this
    /// means absorbing an unbounded run of tokens.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Marks the flag as an abort flag: its presence anywhere in the
    /// input ends evaluation immediately and skips required-flag checks.
    pub fn abort(mut self) -> Self {
        self.abort = true;
        self
    }

    /// Re-matching replaces previously captured values instead of
    /// appending. Implies that re-matching is permitted.
    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Attaches an observational callback, invoked once per captured
    /// value in token order, and once with `""` if this flag aborts the
    /// parse.
    pub fn on_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(f));
        self
    }

    /// Whether this declaration is matched by elimination rather than
    /// by literal tag text.
    pub fn is_positional(&self) -> bool {
        self.tags.is_empty()
    }

    /// Checks a value against the allow-list. An empty allow-list
    /// permits everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagline_core::FlagSpec;
    ///
    /// let spec = FlagSpec::new("mode").allow(["fast", "slow"]);
    /// assert!(spec.permits("fast"));
    /// assert!(!spec.permits("medium"));
    /// assert!(FlagSpec::new("free").permits("anything"));
    /// ```
    pub fn permits(&self, value: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|v| v == value)
    }
}
