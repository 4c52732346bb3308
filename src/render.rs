//! Rendering the line log back to text.
//!
//! A single pass over the log, maintaining a running block depth. Each
//! property line is re-resolved against the store at render time, so
//! updated values appear in their original slot and removed keys simply
//! emit nothing.

use indexmap::IndexMap;

use crate::line::{Line, LineKind};
use crate::options::RenderOptions;
use crate::props::Prop;
use crate::text;

pub(crate) fn render(
    lines: &[Line],
    props: &IndexMap<String, Prop>,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    let mut depth: usize = 0;
    let mut prev_kind: Option<LineKind> = None;

    for entry in lines {
        match entry.kind {
            LineKind::Empty => {
                if !options.pretty || prev_kind != Some(LineKind::Empty) {
                    out.push('\n');
                }
            }
            LineKind::Comment => {
                if options.pretty {
                    out.push_str(text::trim(&entry.raw));
                } else {
                    out.push_str(&entry.raw);
                }
                out.push('\n');
            }
            LineKind::Property => {
                // The property may have been removed; its line slot then
                // renders as nothing.
                if let Some(prop) = props.get(&entry.key) {
                    if options.pretty {
                        push_indent(&mut out, depth, options);
                        out.push_str(&entry.bare_key);
                        if !prop.value.is_empty() {
                            out.push_str(" = ");
                            out.push_str(&text::escape(&prop.value));
                        }
                    } else {
                        out.push_str(&entry.before_key);
                        out.push_str(&entry.bare_key);
                        out.push_str(&entry.after_key);

                        // A bare key stays bare unless a later put gave it
                        // a value.
                        if !entry.lacks_assignment || prop.modified {
                            out.push('=');
                            out.push_str(&entry.before_value);
                            out.push_str(&text::escape(&prop.value));
                            out.push_str(&entry.after_value);
                        }
                    }
                    out.push('\n');
                }
            }
            LineKind::BlockStart => {
                push_indent(&mut out, depth, options);
                out.push_str("{\n");
                depth += 1;
            }
            LineKind::BlockEnd => {
                depth = depth.saturating_sub(1);
                push_indent(&mut out, depth, options);
                out.push_str("}\n");
            }
            // Continuations are folded into the owning property's escaped
            // value.
            LineKind::MultilineContinuation => {}
        }

        prev_kind = Some(entry.kind);
    }

    out
}

fn push_indent(out: &mut String, depth: usize, options: &RenderOptions) {
    for _ in 0..depth * options.indent {
        out.push(' ');
    }
}
