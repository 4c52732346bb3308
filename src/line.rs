//! The line log entry type.
//!
//! One [`Line`] is recorded per physical input line (or synthesized per
//! programmatic addition). The log is append-only and its order is the
//! single source of truth for rendering: parsed lines appear in file order,
//! followed by any lines added through the mutation API.

/// Classification of a physical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// A key/value assignment, or a bare key with no `=`
    Property,
    /// A line whose first non-whitespace character is `#` or `!`
    Comment,
    /// A blank or whitespace-only line
    Empty,
    /// A continuation line of a multi-line value; never rendered on its own
    MultilineContinuation,
    /// A line whose trimmed content is exactly `{`
    BlockStart,
    /// A line whose trimmed content is exactly `}`
    BlockEnd,
}

/// One entry in the line log, with enough captured whitespace to reproduce
/// the original byte layout on render.
#[derive(Clone, Debug)]
pub(crate) struct Line {
    /// The line exactly as it occurred in the input (or synthesized text)
    pub(crate) raw: String,
    pub(crate) kind: LineKind,
    /// Fully-qualified key, set for `Property` lines only
    pub(crate) key: String,
    /// The key as written on this line, without any block prefix
    pub(crate) bare_key: String,
    pub(crate) before_key: String,
    pub(crate) after_key: String,
    pub(crate) before_value: String,
    pub(crate) after_value: String,
    /// The line contained only a key, with no `=value`
    pub(crate) lacks_assignment: bool,
}

impl Line {
    /// Creates an entry for a physical input line. The whitespace fragment
    /// defaults produce `key = value` when nothing is captured, which is the
    /// shape synthesized lines use.
    pub(crate) fn new(raw: impl Into<String>, kind: LineKind) -> Self {
        Line {
            raw: raw.into(),
            kind,
            key: String::new(),
            bare_key: String::new(),
            before_key: String::new(),
            after_key: " ".to_string(),
            before_value: " ".to_string(),
            after_value: String::new(),
            lacks_assignment: false,
        }
    }
}
