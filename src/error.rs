//! Error types for property-file parsing.
//!
//! The error policy is deliberately asymmetric: only the template
//! preprocessor raises errors. All other malformed input (unbalanced braces,
//! duplicate keys, missing `=`) is tolerated with defined fallback behavior,
//! because property files are hand-edited and should parse whenever a
//! reasonable interpretation exists.
//!
//! ## Examples
//!
//! ```rust
//! use propfile::{from_str, Error};
//!
//! let result = from_str("%no-such-template%\n");
//! match result {
//!     Err(Error::UndefinedTemplate { name, line }) => {
//!         assert_eq!(name, "no-such-template");
//!         assert_eq!(line, 1);
//!     }
//!     other => panic!("expected UndefinedTemplate, got {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur while parsing a property file.
///
/// Every parse-time variant carries the one-based line number of the
/// offending input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed template definition or reference delimiter
    #[error("invalid template syntax at line {line}: {msg}")]
    TemplateSyntax { line: usize, msg: String },

    /// A template definition reached end of input before its closing tag
    #[error("template `{name}` starting at line {line} is missing its closing tag")]
    TemplateUnterminated { name: String, line: usize },

    /// A template reference names a template that was never defined
    #[error("template `{name}` referenced at line {line} is not defined")]
    UndefinedTemplate { name: String, line: usize },
}

impl Error {
    /// Creates an I/O error from a read failure.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a template syntax error with line information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propfile::Error;
    ///
    /// let err = Error::template_syntax(3, "definition name is empty");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn template_syntax(line: usize, msg: &str) -> Self {
        Error::TemplateSyntax {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates an unterminated-template error for the definition opened at `line`.
    pub fn template_unterminated(name: &str, line: usize) -> Self {
        Error::TemplateUnterminated {
            name: name.to_string(),
            line,
        }
    }

    /// Creates an undefined-template error for the reference at `line`.
    pub fn undefined_template(name: &str, line: usize) -> Self {
        Error::UndefinedTemplate {
            name: name.to_string(),
            line,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
