//! The template preprocessor.
//!
//! Runs once over the raw input, before any other parsing step, and expands
//! template blocks textually:
//!
//! ```text
//! <defaults>
//! log.level = info
//! log.rotate = true
//! </defaults>
//!
//! server
//! {
//! %defaults%
//! }
//! ```
//!
//! A `<name>` line opens a definition that runs until a `</...>` line; a
//! `%name%` line replays the stored body verbatim at the reference site.
//! Templates may be referenced any number of times but are not expanded
//! recursively. Definitions exist only during preprocessing; neither they
//! nor the reference lines appear in the parsed model.
//!
//! This is the only parsing stage that can fail, see [`crate::error`].

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::text;

/// Expands template definitions and references, producing an equivalent
/// stream in which every line is `\n`-terminated.
pub(crate) fn preprocess(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut templates: HashMap<String, Vec<&str>> = HashMap::new();

    let mut lines = text::physical_lines(input).enumerate();
    while let Some((idx, line)) = lines.next() {
        let lineno = idx + 1;

        if is_template_start(line) {
            let trimmed = text::trim(line);
            if trimmed.len() < 3 {
                return Err(Error::template_syntax(lineno, "definition name is empty"));
            }
            let name = delimited_name(trimmed);

            let mut body = Vec::new();
            let mut terminated = false;
            for (_, def_line) in lines.by_ref() {
                if is_template_end(def_line) {
                    terminated = true;
                    break;
                }
                body.push(def_line);
            }
            if !terminated {
                return Err(Error::template_unterminated(name, lineno));
            }

            templates.insert(name.to_string(), body);
        } else if is_template_reference(line) {
            let trimmed = text::trim(line);
            if trimmed.len() < 3 {
                return Err(Error::template_syntax(lineno, "reference name is empty"));
            }
            let name = delimited_name(trimmed);

            let body = templates
                .get(name)
                .ok_or_else(|| Error::undefined_template(name, lineno))?;
            for template_line in body {
                out.push_str(template_line);
                out.push('\n');
            }
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }

    Ok(out)
}

/// Strips the delimiter characters off a trimmed `<name>` or `%name%` line.
fn delimited_name(trimmed: &str) -> &str {
    let mut chars = trimmed.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// A line whose first non-whitespace character is `<`, not followed by `/`.
fn is_template_start(line: &str) -> bool {
    let rest = text::split_leading_ws(line).1;
    rest.starts_with('<') && !rest.starts_with("</")
}

/// A line whose trimmed content starts with `</`.
fn is_template_end(line: &str) -> bool {
    text::split_leading_ws(line).1.starts_with("</")
}

/// A line whose first non-whitespace character is `%`.
fn is_template_reference(line: &str) -> bool {
    text::split_leading_ws(line).1.starts_with('%')
}
