//! Renderer — converts a JSON value tree into an HTML fragment.
//!
//! This is the pure half of the viewer: no side effects, no instance ids, no
//! style or script. It walks a `serde_json::Value` and emits one nested
//! markup fragment whose structure mirrors the input:
//!
//! - **Scalars**: one `<span>` per value, classed by type for syntax coloring
//! - **Empty containers**: fixed `{}` / `[]` tokens, non-interactive
//! - **Non-empty containers**: a collapse toggle followed by a content block
//!   holding one `property` row per entry, each prefixed with a positional
//!   marker glyph (`┌` first, `├` middle, `└` last)
//! - **Depth limiting**: at `max_depth` the subtree is replaced by a quoted
//!   ellipsis placeholder and recursion stops
//!
//! Relies on `serde_json::Map` with the `preserve_order` feature so object
//! rows appear in the input's insertion order.
//!
//! # Example
//! ```
//! use jsonview_core::{render_fragment, RenderOptions};
//! use serde_json::json;
//!
//! let html = render_fragment(&json!({"name": "Alice"}), &RenderOptions::default());
//! assert!(html.contains(r#"<span class="json-key">"name"</span>"#));
//! ```

use crate::escape::escape_html_into;
use crate::options::RenderOptions;
use serde_json::Value;

/// Placeholder emitted in place of any subtree at or below `max_depth`.
const TRUNCATED: &str = r#"<span class="json-string">"..."</span>"#;

/// Render a value as a complete fragment, starting at depth 0 with an empty
/// path. This is the entry point the Presenter wraps in a viewer container.
pub fn render_fragment(value: &Value, options: &RenderOptions) -> String {
    let mut out = String::new();
    render_value(value, 0, "", options, &mut out);
    out
}

/// Core dispatch: append the markup for `value` at the given nesting depth.
///
/// `path` is a dot/bracket accessor trail (`items[2].name`) emitted as a
/// `data-path` attribute on container rows. It is an addressing aid for
/// client-side tooling, not load-bearing for rendering.
///
/// Never fails: every `serde_json::Value` variant has a branch, and the
/// depth check bounds recursion when `max_depth` is set.
pub fn render_value(value: &Value, depth: usize, path: &str, options: &RenderOptions, out: &mut String) {
    if let Some(max) = options.max_depth {
        if depth >= max {
            out.push_str(TRUNCATED);
            return;
        }
    }

    match value {
        Value::Null => out.push_str(r#"<span class="json-null">null</span>"#),
        Value::Bool(b) => {
            out.push_str(r#"<span class="json-boolean">"#);
            out.push_str(if *b { "true" } else { "false" });
            out.push_str("</span>");
        }
        Value::Number(n) => {
            // serde_json's canonical decimal form, no extra formatting.
            out.push_str(r#"<span class="json-number">"#);
            out.push_str(&n.to_string());
            out.push_str("</span>");
        }
        Value::String(s) => {
            out.push_str(r#"<span class="json-string">""#);
            escape_html_into(s, out);
            out.push_str(r#""</span>"#);
        }
        Value::Object(map) => render_object(map, depth, path, options, out),
        Value::Array(arr) => render_array(arr, depth, path, options, out),
    }
}

/// Render an object: `{}` token when empty, otherwise a collapsible region
/// with one keyed row per entry in map iteration order.
fn render_object(
    map: &serde_json::Map<String, Value>,
    depth: usize,
    path: &str,
    options: &RenderOptions,
    out: &mut String,
) {
    if map.is_empty() {
        out.push_str(r#"<span class="json-bracket">{}</span>"#);
        return;
    }

    open_region(options, out);
    let len = map.len();
    for (i, (key, child)) in map.iter().enumerate() {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        open_property(i, len, &child_path, out);
        out.push_str(r#"<span class="json-key">""#);
        escape_html_into(key, out);
        out.push_str(r#""</span><span class="key-value-separator">:</span>"#);
        render_value(child, depth + 1, &child_path, options, out);
        out.push_str("</div>\n");
    }
    close_region(out);
}

/// Render an array: `[]` token when empty, otherwise the same collapsible
/// shape as objects but with unkeyed rows and `path[i]` child paths.
fn render_array(arr: &[Value], depth: usize, path: &str, options: &RenderOptions, out: &mut String) {
    if arr.is_empty() {
        out.push_str(r#"<span class="json-bracket">[]</span>"#);
        return;
    }

    open_region(options, out);
    let len = arr.len();
    for (i, item) in arr.iter().enumerate() {
        let child_path = format!("{path}[{i}]");
        open_property(i, len, &child_path, out);
        render_value(item, depth + 1, &child_path, options, out);
        out.push_str("</div>\n");
    }
    close_region(out);
}

/// Open a collapsible region: the toggle glyph plus the content container.
/// The initial state comes from `options.collapsed` — the `collapsed` class
/// hides the content and the glyph shows `▶` instead of `▼`.
fn open_region(options: &RenderOptions, out: &mut String) {
    if options.collapsed {
        out.push_str("<div class=\"collapsible\">\u{25b6}</div>\n");
        out.push_str(r#"<div class="content collapsed"><div class="json-container">"#);
    } else {
        out.push_str("<div class=\"collapsible\">\u{25bc}</div>\n");
        out.push_str(r#"<div class="content"><div class="json-container">"#);
    }
    out.push('\n');
}

fn close_region(out: &mut String) {
    out.push_str("</div></div>");
}

/// Open one property row: the `data-path` attribute and the positional
/// marker for entry `i` of `len`.
fn open_property(i: usize, len: usize, child_path: &str, out: &mut String) {
    out.push_str(r#"<div class="property" data-path=""#);
    escape_html_into(child_path, out);
    out.push_str(r#""><span class="depth-marker">"#);
    out.push(position_marker(i, len));
    out.push_str("</span>");
}

/// Positional marker glyph for entry `i` of `len` siblings (`len >= 1`).
///
/// The index-0 test wins before the last-entry test, so a single entry is
/// classified "first" (`┌`), not "last". Deliberate tie-break.
fn position_marker(i: usize, len: usize) -> char {
    if i == 0 {
        '\u{250c}' // ┌
    } else if i == len - 1 {
        '\u{2514}' // └
    } else {
        '\u{251c}' // ├
    }
}
