//! Whitespace-preserving text primitives.
//!
//! Everything in this module is a pure function over `&str`. The trim
//! functions return what they stripped alongside the trimmed core, which is
//! how the parser captures the exact whitespace layout of a line so the
//! renderer can reproduce it byte for byte.
//!
//! The whitespace set matches the properties format convention: space, tab,
//! newline, carriage return, vertical tab and form feed.

/// Splits input into physical lines the way `getline` does: a trailing
/// newline does not produce a final empty line, and `\r` stays attached to
/// the line content so `\r\n` endings survive a round trip.
pub(crate) fn physical_lines(input: &str) -> std::vec::IntoIter<&str> {
    let mut lines: Vec<&str> = input.split('\n').collect();
    if input.is_empty() || input.ends_with('\n') {
        lines.pop();
    }
    lines.into_iter()
}

/// Returns `true` for the characters the format treats as whitespace.
pub(crate) fn is_ws(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{000B}' | '\u{000C}')
}

/// Splits `s` into `(leading whitespace, rest)`.
pub(crate) fn split_leading_ws(s: &str) -> (&str, &str) {
    let idx = s
        .char_indices()
        .find(|&(_, ch)| !is_ws(ch))
        .map_or(s.len(), |(idx, _)| idx);
    s.split_at(idx)
}

/// Splits `s` into `(rest, trailing whitespace)`.
pub(crate) fn split_trailing_ws(s: &str) -> (&str, &str) {
    let idx = s
        .char_indices()
        .rev()
        .find(|&(_, ch)| !is_ws(ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8());
    s.split_at(idx)
}

/// Trims `s` on both sides, returning `(leading, core, trailing)`.
///
/// Concatenating the three parts reproduces `s` exactly.
pub(crate) fn trim_parts(s: &str) -> (&str, &str, &str) {
    let (leading, rest) = split_leading_ws(s);
    let (core, trailing) = split_trailing_ws(rest);
    (leading, core, trailing)
}

/// Trims `s` on both sides, discarding the stripped whitespace.
pub(crate) fn trim(s: &str) -> &str {
    trim_parts(s).1
}

/// Trims trailing whitespace only.
pub(crate) fn trim_right(s: &str) -> &str {
    split_trailing_ws(s).0
}

/// Checks whether the last non-whitespace character of `s` is `ch`.
pub(crate) fn ends_with_ignoring_ws(s: &str, ch: char) -> bool {
    trim_right(s).ends_with(ch)
}

/// Removes `'single'` or `"double"` quotes wrapping the entire string.
///
/// The input must already be trimmed. Strings of length two or less are
/// returned unchanged, so `""` stays `""`.
pub(crate) fn unquote(s: &str) -> &str {
    if s.len() > 2
        && ((s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('"') && s.ends_with('"')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Escapes a value for output.
///
/// Each leading whitespace character is prefixed with a backslash so it
/// survives the next parse, and every embedded newline becomes a `\`
/// line-continuation followed by a four space continuation indent.
pub(crate) fn escape(s: &str) -> String {
    let (leading, rest) = split_leading_ws(s);
    if leading.is_empty() && !rest.contains('\n') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + leading.len());
    for ch in leading.chars() {
        out.push('\\');
        out.push(ch);
    }
    out.push_str(&rest.replace('\n', "\\\n    "));
    out
}

/// Reverses [`escape`]'s leading-whitespace protection.
///
/// Consumes the run of `\x` pairs at the start of the string, keeping each
/// escaped character; the remainder (including any embedded backslashes) is
/// left untouched.
pub(crate) fn unescape(s: &str) -> String {
    if !s.starts_with('\\') || s.len() < 2 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(stripped) = rest.strip_prefix('\\') {
        let Some(ch) = stripped.chars().next() else {
            // Lone trailing backslash, keep it.
            break;
        };
        out.push(ch);
        rest = &stripped[ch.len_utf8()..];
    }
    out.push_str(rest);
    out
}
