//! Configuration options for rendering.
//!
//! [`RenderOptions`] selects between the two output modes:
//!
//! - **Preserving** (the default): reproduces the original byte layout of
//!   every untouched line, including comments, blank lines and whitespace.
//! - **Pretty**: normalizes whitespace, indents prefix blocks and collapses
//!   runs of blank lines into one.
//!
//! ## Examples
//!
//! ```rust
//! use propfile::{from_str, RenderOptions};
//!
//! let props = from_str("server\n{\nport = 1234\n}\n").unwrap();
//!
//! // Format-preserving output
//! let text = props.render(&RenderOptions::new());
//!
//! // Pretty-printed with 8-space block indentation
//! let pretty = props.render(&RenderOptions::pretty().with_indent(8));
//! assert!(pretty.contains("        port = 1234"));
//! ```

/// Rendering configuration.
///
/// # Examples
///
/// ```rust
/// use propfile::RenderOptions;
///
/// let options = RenderOptions::pretty().with_indent(2);
/// assert!(options.pretty);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Spaces per block-nesting level
    pub indent: usize,
    /// Normalize whitespace and collapse blank-line runs
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 4,
            pretty: false,
        }
    }
}

impl RenderOptions {
    /// Creates default options (format-preserving, 4-space block indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propfile::RenderOptions;
    ///
    /// let options = RenderOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        RenderOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size for prefix blocks (default 4).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
