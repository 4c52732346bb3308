//! # propfile
//!
//! A round-trip parser and renderer for properties-style configuration
//! files. The defining feature is **lossless format preservation**:
//! comments, blank lines, whitespace, escaping and property order survive a
//! parse→render cycle byte for byte, while programmatic edits touch only
//! the lines they concern.
//!
//! ## Format
//!
//! The format is a superset of Java-style `.properties` files with a few
//! deliberate differences:
//!
//! - Input and output are UTF-8, not Latin-1
//! - Only `=` assigns values (never `:`), so keys like `host:name` work
//! - **Prefix blocks** group keys under a dotted prefix:
//!
//!   ```text
//!   server
//!   {
//!       port = 1234
//!       log.level = debug
//!   }
//!   ```
//!
//!   is the same as `server.port = 1234` and `server.log.level = debug`,
//!   with arbitrary nesting.
//! - **Templates** reduce duplication: `<name>` ... `</name>` defines a
//!   block of lines, and a `%name%` line replays it in place.
//! - A value ending in `\` continues on the next line; a value wrapped
//!   entirely in `'...'` or `"..."` has the quotes stripped.
//!
//! ## Quick Start
//!
//! ```rust
//! use propfile::{from_str, RenderOptions};
//!
//! let input = "\
//! # network settings
//! server
//! {
//! port = 1234
//! }
//! ";
//!
//! let mut props = from_str(input).unwrap();
//! assert_eq!(props.get("server.port"), "1234");
//!
//! // Untouched documents render back byte for byte.
//! assert_eq!(props.to_string(), input);
//!
//! // Edits preserve the surrounding formatting.
//! props.put("server.port", "8080");
//! assert!(props.to_string().contains("port = 8080"));
//!
//! // Pretty printing normalizes indentation instead.
//! let pretty = props.render(&RenderOptions::pretty());
//! assert!(pretty.contains("    port = 8080"));
//! ```
//!
//! ## Error Policy
//!
//! Only the template preprocessor raises errors; see [`Error`]. Everything
//! else — unbalanced braces, duplicate keys, lines without `=` — is
//! tolerated with defined fallback behavior, because hand-edited config
//! files should parse whenever a reasonable interpretation exists.
//!
//! ## Concurrency
//!
//! [`Properties`] is plain single-threaded data with no interior locking;
//! synchronize externally for shared access.

pub mod error;
pub mod options;
pub mod props;

mod line;
mod parse;
mod prefix;
mod render;
mod template;
mod text;

pub use error::{Error, Result};
pub use options::RenderOptions;
pub use props::Properties;

use std::io;

/// Parses a property document from a string.
///
/// # Examples
///
/// ```rust
/// use propfile::from_str;
///
/// let props = from_str("greeting = hello\n").unwrap();
/// assert_eq!(props.get("greeting"), "hello");
/// ```
///
/// # Errors
///
/// Returns an error if a template definition or reference is malformed,
/// unterminated or undefined.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Properties> {
    Properties::parse(input)
}

/// Parses a property document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use propfile::from_reader;
/// use std::io::Cursor;
///
/// let props = from_reader(Cursor::new(b"greeting = hello\n")).unwrap();
/// assert_eq!(props.get("greeting"), "hello");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or a template
/// is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Properties> {
    Properties::from_reader(reader)
}
