//! HTML escaping for text interpolated into the output document.
//!
//! Every piece of caller-controlled text (string leaves, object keys, the
//! title, `data-path` attribute values) passes through here before it reaches
//! the markup, so untrusted input cannot inject elements or break out of
//! attributes.

/// Escape `&`, `<`, `>` and `"` and append the result to `out`.
///
/// `&` must be rewritten first conceptually; the per-character match handles
/// that for free. `"` is included because escaped text also lands inside
/// double-quoted attribute values.
pub fn escape_html_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Escape into a fresh `String`. Convenience wrapper over [`escape_html_into`].
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_html_into(s, &mut out);
    out
}
