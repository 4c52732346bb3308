//! The property model.
//!
//! [`Properties`] owns the two halves of the parsed document:
//!
//! - the **line log**, an ordered record of every physical line, which the
//!   renderer walks to reproduce the original layout;
//! - the **property store**, a keyed map from fully-qualified key to decoded
//!   value, which backs the lookup and mutation API.
//!
//! The split exists because format preservation needs line-level fidelity
//! while lookups need O(1) key access; the two containers are linked only by
//! key equality, re-queried at render time.
//!
//! ## Examples
//!
//! ```rust
//! use propfile::Properties;
//!
//! let mut props = Properties::parse(
//!     "# app config\nserver\n{\nport = 1234\n}\n",
//! ).unwrap();
//!
//! assert_eq!(props.get("server.port"), "1234");
//!
//! props.put("server.port", "8080");
//! props.put_comment("added by deploy script");
//! props.put("deployed", "true");
//!
//! let text = props.to_string();
//! assert!(text.starts_with("# app config\n"));
//! assert!(text.ends_with("# added by deploy script\ndeployed = true\n"));
//! ```

use std::fmt;
use std::io;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::line::{Line, LineKind};
use crate::options::RenderOptions;
use crate::render;
use crate::{parse, template};

/// Stored state of one property.
#[derive(Clone, Debug)]
pub(crate) struct Prop {
    /// Decoded (unescaped, unquoted) value
    pub(crate) value: String,
    /// Set once `put` touches this key after the initial parse; affects how
    /// bare keys without `=` are rendered
    pub(crate) modified: bool,
}

impl Prop {
    pub(crate) fn parsed(value: String) -> Self {
        Prop {
            value,
            modified: false,
        }
    }

    pub(crate) fn put(value: String) -> Self {
        Prop {
            value,
            modified: true,
        }
    }
}

/// A parsed property document supporting lookup, mutation and
/// format-preserving rendering.
///
/// Comments, blank lines, whitespace and property order all survive a
/// parse→render cycle unchanged; edits touch only the lines they concern.
/// New properties, comments and blank lines are appended at the end.
///
/// The type is single-threaded plain data: wrap it in a lock for shared
/// access across threads.
#[derive(Clone, Debug, Default)]
pub struct Properties {
    lines: Vec<Line>,
    props: IndexMap<String, Prop>,
}

impl Properties {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a property document.
    ///
    /// Template references are expanded first; the expanded stream is then
    /// classified line by line. Only template errors fail the parse, all
    /// other malformed input is tolerated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propfile::Properties;
    ///
    /// let props = Properties::parse("greeting = hello\n").unwrap();
    /// assert_eq!(props.get("greeting"), "hello");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if a template definition or reference is malformed,
    /// unterminated or undefined.
    pub fn parse(input: &str) -> Result<Self> {
        let expanded = template::preprocess(input)?;
        let (lines, props) = parse::parse_expanded(&expanded);
        Ok(Properties { lines, props })
    }

    /// Parses a property document from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the input is not UTF-8, or a
    /// template is malformed.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|e| Error::io(&e.to_string()))?;
        Self::parse(&input)
    }

    /// Returns `true` if the key exists.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Returns the decoded value for `key`, or `""` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propfile::Properties;
    ///
    /// let props = Properties::parse("a = 1\n").unwrap();
    /// assert_eq!(props.get("a"), "1");
    /// assert_eq!(props.get("missing"), "");
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.props.get(key).map_or("", |prop| prop.value.as_str())
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.props
            .get(key)
            .map_or(default, |prop| prop.value.as_str())
    }

    /// Returns `true` if the value for `key` is `"true"`, `"1"` or `"yes"`,
    /// `false` for any other stored value, and `default` if the key is
    /// absent.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.props
            .get(key)
            .map_or(default, |prop| {
                matches!(prop.value.as_str(), "true" | "1" | "yes")
            })
    }

    /// Sets the value for `key`, returning the previous value if there was
    /// one.
    ///
    /// An existing property is updated in place and keeps its position and
    /// surrounding whitespace in the output. A new key appends a
    /// `key = value` line after all existing content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propfile::Properties;
    ///
    /// let mut props = Properties::parse("a = 1\n").unwrap();
    /// assert_eq!(props.put("a", "2"), Some("1".to_string()));
    /// assert_eq!(props.put("b", "3"), None);
    /// assert_eq!(props.to_string(), "a = 2\nb = 3\n");
    /// ```
    pub fn put(&mut self, key: &str, value: &str) -> Option<String> {
        if let Some(prop) = self.props.get_mut(key) {
            prop.modified = true;
            return Some(std::mem::replace(&mut prop.value, value.to_string()));
        }

        let mut entry = Line::new(format!("{key} = {value}"), LineKind::Property);
        entry.key = key.to_string();
        entry.bare_key = key.to_string();
        self.lines.push(entry);

        self.props.insert(key.to_string(), Prop::put(value.to_string()));
        None
    }

    /// Removes `key`, returning its value if it existed.
    ///
    /// The property's line keeps its slot in the log but is skipped when
    /// rendering, so the surrounding layout is untouched.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.props.shift_remove(key).map(|prop| prop.value)
    }

    /// Appends an empty line.
    pub fn put_empty_line(&mut self) {
        self.lines.push(Line::new("", LineKind::Empty));
    }

    /// Appends a comment line.
    ///
    /// The text is trimmed and prefixed with `# ` unless it already carries
    /// a `#` or `!` marker. Blank text is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propfile::Properties;
    ///
    /// let mut props = Properties::new();
    /// props.put_comment("generated file");
    /// props.put_comment("! keep this marker");
    /// assert_eq!(props.to_string(), "# generated file\n! keep this marker\n");
    /// ```
    pub fn put_comment(&mut self, comment: &str) {
        let trimmed = crate::text::trim(comment);
        if trimmed.is_empty() {
            return;
        }

        let line = if trimmed.starts_with('#') || trimmed.starts_with('!') {
            trimmed.to_string()
        } else {
            format!("# {trimmed}")
        };
        self.lines.push(Line::new(line, LineKind::Comment));
    }

    /// Returns an iterator over all fully-qualified keys.
    ///
    /// Iteration order is store order (first insertion), not necessarily
    /// file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// Returns an iterator over all decoded values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.props.values().map(|prop| prop.value.as_str())
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns `true` if the document holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Renders the document, including any updates, as text that can be
    /// written back to the property file.
    ///
    /// With default options the original formatting is kept intact. Pretty
    /// printing normalizes whitespace, indents prefix blocks and collapses
    /// runs of blank lines.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        render::render(&self.lines, &self.props, options)
    }
}

impl std::str::FromStr for Properties {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

/// Renders with default (format-preserving) options.
impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::new()))
    }
}
