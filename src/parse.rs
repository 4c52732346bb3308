//! The line classifier.
//!
//! Consumes the preprocessed stream line by line and builds the two halves
//! of the model in a single pass: the ordered line log (every physical line,
//! in file order) and the keyed property store (fully-qualified key to
//! decoded value). The two are linked only by key-string equality.
//!
//! Classification order, first match wins: comment, empty, block start,
//! block end, property. Classification never fails; malformed input such as
//! unbalanced braces or a key without `=` gets a permissive fallback
//! reading instead.

use indexmap::IndexMap;

use crate::line::{Line, LineKind};
use crate::prefix::PrefixStack;
use crate::props::Prop;
use crate::text;

/// Parses the preprocessed (template-expanded) stream into the line log and
/// property store.
pub(crate) fn parse_expanded(expanded: &str) -> (Vec<Line>, IndexMap<String, Prop>) {
    let mut log: Vec<Line> = Vec::new();
    let mut store: IndexMap<String, Prop> = IndexMap::new();
    let mut prefixes = PrefixStack::new();

    let mut input = text::physical_lines(expanded);
    while let Some(raw) = input.next() {
        if is_comment(raw) {
            log.push(Line::new(raw, LineKind::Comment));
        } else if is_empty(raw) {
            log.push(Line::new(raw, LineKind::Empty));
        } else if text::trim(raw) == "{" {
            log.push(Line::new(raw, LineKind::BlockStart));
            prefixes.open_block();
        } else if text::trim(raw) == "}" {
            log.push(Line::new(raw, LineKind::BlockEnd));
            prefixes.close_block();
        } else {
            let mut entry = Line::new(raw, LineKind::Property);

            let (bare_key, mut value) = match raw.find('=') {
                // A line without `=` is a key with an empty value. It may
                // also open a prefix block on the next line.
                None => {
                    let (before, key, after) = text::trim_parts(raw);
                    entry.before_key = before.to_string();
                    entry.after_key = after.to_string();
                    entry.lacks_assignment = true;
                    prefixes.set_pending(key);
                    (key.to_string(), String::new())
                }
                Some(pos) => {
                    let (before, key, after) = text::trim_parts(&raw[..pos]);
                    entry.before_key = before.to_string();
                    entry.after_key = after.to_string();

                    let (before, val, after) = text::trim_parts(&raw[pos + 1..]);
                    entry.before_value = before.to_string();
                    entry.after_value = after.to_string();

                    prefixes.clear_pending();
                    (key.to_string(), text::unescape(val))
                }
            };

            entry.bare_key = bare_key.clone();
            let key = prefixes.qualify(&bare_key);
            entry.key = key.clone();
            log.push(entry);

            if text::ends_with_ignoring_ws(&value, '\\') {
                value.pop();
                value = text::unquote(text::trim_right(&value)).to_string();
                consume_continuations(&mut input, &mut log, &mut value);
            } else {
                value = text::unquote(&value).to_string();
            }

            // Later duplicates overwrite the stored value; every line stays
            // in the log.
            store.insert(key, Prop::parsed(value));
        }
    }

    (log, store)
}

/// Consumes the continuation lines of a multi-line value, appending each
/// piece to `value`. The first line that does not end in `\` terminates the
/// sequence.
fn consume_continuations<'a>(
    input: &mut impl Iterator<Item = &'a str>,
    log: &mut Vec<Line>,
    value: &mut String,
) {
    for raw in input {
        log.push(Line::new(raw, LineKind::MultilineContinuation));

        let trimmed = text::trim(raw);
        if let Some(stripped) = trimmed.strip_suffix('\\') {
            // Trailing whitespace before the marker survives unless the
            // piece itself ends in a quote or backslash.
            if text::ends_with_ignoring_ws(stripped, '"')
                || text::ends_with_ignoring_ws(stripped, '\\')
            {
                value.push_str(text::unquote(text::trim_right(stripped)));
            } else {
                value.push_str(stripped);
            }
        } else {
            value.push_str(text::unquote(trimmed));
            break;
        }
    }
}

/// A left-trimmed line starting with `#` or `!` is a comment.
fn is_comment(line: &str) -> bool {
    matches!(
        text::split_leading_ws(line).1.chars().next(),
        Some('#') | Some('!')
    )
}

/// An empty line, or a line consisting only of whitespace.
fn is_empty(line: &str) -> bool {
    line.chars().all(text::is_ws)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> (Vec<Line>, IndexMap<String, Prop>) {
        parse_expanded(input)
    }

    #[test]
    fn classifies_comments_and_blanks() {
        let (log, store) = parse("# a comment\n! another\n\n   \n");
        assert_eq!(log.len(), 4);
        assert_eq!(log[0].kind, LineKind::Comment);
        assert_eq!(log[1].kind, LineKind::Comment);
        assert_eq!(log[2].kind, LineKind::Empty);
        assert_eq!(log[3].kind, LineKind::Empty);
        assert!(store.is_empty());
    }

    #[test]
    fn splits_on_first_equals_only() {
        let (_, store) = parse("url = a=b=c\n");
        assert_eq!(store.get("url").unwrap().value, "a=b=c");
    }

    #[test]
    fn captures_whitespace_fragments() {
        let (log, _) = parse("  key\t = \tvalue  \n");
        let entry = &log[0];
        assert_eq!(entry.before_key, "  ");
        assert_eq!(entry.bare_key, "key");
        assert_eq!(entry.after_key, "\t ");
        assert_eq!(entry.before_value, " \t");
        assert_eq!(entry.after_value, "  ");
    }

    #[test]
    fn bare_key_has_empty_value() {
        let (log, store) = parse("standalone\n");
        assert!(log[0].lacks_assignment);
        assert_eq!(store.get("standalone").unwrap().value, "");
    }

    #[test]
    fn qualifies_keys_inside_blocks() {
        let (log, store) = parse("server\n{\nport = 1234\nlog.level = debug\n}\n");
        assert_eq!(store.get("server.port").unwrap().value, "1234");
        assert_eq!(store.get("server.log.level").unwrap().value, "debug");

        // The bare key is kept for rendering.
        let port = log.iter().find(|l| l.key == "server.port").unwrap();
        assert_eq!(port.bare_key, "port");
    }

    #[test]
    fn assignment_between_key_and_brace_cancels_prefix() {
        let (_, store) = parse("server\nother = 1\n{\nport = 2\n}\n");
        assert_eq!(store.get("port").unwrap().value, "2");
        assert!(!store.contains_key("server.port"));
    }

    #[test]
    fn extra_closers_are_tolerated() {
        let (_, store) = parse("}\n}\nkey = v\n");
        assert_eq!(store.get("key").unwrap().value, "v");
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let (log, store) = parse("k = first\nk = second\n");
        assert_eq!(log.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k").unwrap().value, "second");
    }

    #[test]
    fn multiline_value_concatenates_trimmed_pieces() {
        let (log, store) = parse("msg = line one \\\nlinetwo\nnext = 1\n");
        assert_eq!(store.get("msg").unwrap().value, "line onelinetwo");
        assert_eq!(log[1].kind, LineKind::MultilineContinuation);
        assert_eq!(store.get("next").unwrap().value, "1");
    }

    #[test]
    fn multiline_value_spanning_three_lines() {
        let (_, store) = parse("msg = a \\\nb \\\nc\n");
        assert_eq!(store.get("msg").unwrap().value, "ab c");
    }

    #[test]
    fn quoted_value_is_unwrapped() {
        let (_, store) = parse("a = \"  spaced  \"\nb = 'single'\n");
        assert_eq!(store.get("a").unwrap().value, "  spaced  ");
        assert_eq!(store.get("b").unwrap().value, "single");
    }

    #[test]
    fn escaped_leading_whitespace_is_decoded() {
        let (_, store) = parse("pad = \\ \\ indented\n");
        assert_eq!(store.get("pad").unwrap().value, "  indented");
    }
}
