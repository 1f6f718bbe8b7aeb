//! Presenter — assembles one complete, self-contained viewer document and
//! hands it to the host display channel.
//!
//! A document is the concatenation of four blocks, all scoped to a freshly
//! minted [`ViewerInstanceId`]:
//!
//! 1. a `<style>` block whose every selector is prefixed with the instance
//!    root id, with the palette and `indent_size` baked in
//! 2. an optional HTML-escaped title block
//! 3. the rendered value wrapped in the instance-rooted container
//! 4. a `<script>` block attaching one delegated click listener to the
//!    instance root for collapse/expand toggling
//!
//! The script comes last: it looks up the instance root as soon as it runs,
//! so in hosts that execute scripts in document order (srcdoc iframes, saved
//! HTML files) the root element must already exist.
//!
//! Id-scoping is what lets several viewers coexist on one notebook page:
//! nothing global is touched, so two instances can never fight over style
//! rules or event handlers.

use crate::error::{Result, ViewerError};
use crate::escape::escape_html;
use crate::options::RenderOptions;
use crate::render::render_fragment;
use crate::theme::Theme;
use serde_json::Value;
use uuid::Uuid;

/// Opaque unique token scoping one document's generated identifiers.
///
/// Minted once at the start of a top-level render, embedded into the root
/// element id and every style/script selector, and discarded when the call
/// returns. Freshness per invocation is the sole cross-instance invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerInstanceId(String);

impl ViewerInstanceId {
    /// Mint a fresh id (UUID v4, simple hex form).
    pub fn mint() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// The HTML id of the document's root element.
    pub fn root_id(&self) -> String {
        format!("json-viewer-{}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Capability the Presenter needs from the host: accept one markup payload.
///
/// Implementations adapt whatever rich-display mechanism the surrounding
/// environment exposes (IPython's `display(HTML(...))`, a DOM sink, a test
/// buffer). The Presenter makes exactly one call per invocation.
pub trait DisplayChannel {
    fn display(&mut self, markup: &str) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Render a parsed value into a complete viewer document string.
///
/// Pure except for id minting: no I/O, no display hand-off. Bindings that
/// own their display path (wasm, tests) use this directly.
pub fn render_document(value: &Value, options: &RenderOptions) -> String {
    let instance = ViewerInstanceId::mint();
    let root = instance.root_id();
    let theme = Theme::select(options.dark_mode);

    let mut out = String::new();
    out.push_str(&generate_css(&root, &theme, options.indent_size));
    out.push_str(&format!(r#"<div id="{root}">"#));
    out.push('\n');
    if let Some(title) = &options.title {
        out.push_str(r#"<div class="json-title">"#);
        out.push_str(&escape_html(title));
        out.push_str("</div>\n");
    }
    out.push_str(r#"<div class="json-viewer">"#);
    out.push_str(&render_fragment(value, options));
    out.push_str("</div>\n</div>\n");
    out.push_str(&generate_script(&root));
    out
}

/// Parse a JSON string and render it into a complete viewer document.
pub fn render_html(json: &str, options: &RenderOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(render_document(&value, options))
}

/// Parse, render, and hand the document to the host display channel.
///
/// The only side effect is the single `channel.display` call. A channel
/// failure surfaces as one uniform [`ViewerError::Display`] carrying the
/// original cause, never as a raw lower-level error.
pub fn display_json(json: &str, options: &RenderOptions, channel: &mut dyn DisplayChannel) -> Result<()> {
    let markup = render_html(json, options)?;
    channel
        .display(&markup)
        .map_err(|source| ViewerError::Display { source })
}

/// Generate the instance-scoped `<style>` block.
///
/// Every selector is prefixed with `#{root}` so rules from one viewer can
/// never leak into another on the same page. Palette colors and the
/// per-level `indent_size` padding are interpolated directly.
fn generate_css(root: &str, theme: &Theme, indent_size: u32) -> String {
    format!(
        r#"<style>
#{root} .json-viewer {{
    font-family: 'JetBrains Mono', 'Fira Code', Consolas, monospace;
    font-size: 10px;
    background-color: {background};
    color: {text};
    border-radius: 8px;
    padding: 1.5em;
    line-height: 1.6;
    box-shadow: 0 2px 8px {shadow};
}}
#{root} .json-title {{
    font-size: 12px;
    font-weight: bold;
    margin-bottom: 15px;
    color: {text};
    border-bottom: 2px solid {line};
    padding-bottom: 8px;
}}
#{root} .json-string {{ color: {string}; word-break: break-word; }}
#{root} .json-number {{ color: {number}; }}
#{root} .json-boolean {{ color: {boolean}; }}
#{root} .json-null {{ color: {null}; }}
#{root} .json-key {{
    color: {key};
    font-weight: 600;
    margin-right: 8px;
}}
#{root} .json-bracket {{ color: {text}; opacity: 0.7; }}
#{root} .json-container {{ position: relative; padding-left: {indent_size}px; }}
#{root} .collapsible {{
    cursor: pointer;
    padding: 2px 8px;
    background-color: {collapsible_bg};
    border-radius: 4px;
    display: inline-block;
    margin: 2px;
    transition: all 0.2s;
    border: 1px solid transparent;
}}
#{root} .collapsible:hover {{
    background-color: {collapsible_hover};
    border-color: {collapsible_border};
}}
#{root} .content {{
    display: block;
    position: relative;
}}
#{root} .collapsed {{ display: none; }}
#{root} .property {{
    display: flex;
    align-items: flex-start;
    padding: 2px 0;
    border-radius: 4px;
}}
#{root} .property:hover {{
    background-color: {property_hover};
}}
#{root} .key-value-separator {{
    margin: 0 8px;
    color: {null};
}}
#{root} .depth-marker {{
    color: {null};
    margin-right: 8px;
    font-size: 10px;
    opacity: 0.5;
}}
</style>
"#,
        root = root,
        background = theme.background,
        text = theme.text,
        string = theme.string,
        number = theme.number,
        boolean = theme.boolean,
        null = theme.null,
        key = theme.key,
        line = theme.line,
        collapsible_bg = theme.collapsible_bg,
        collapsible_hover = theme.collapsible_hover,
        collapsible_border = theme.collapsible_border,
        property_hover = theme.property_hover,
        shadow = theme.shadow,
        indent_size = indent_size,
    )
}

/// Generate the instance-scoped interaction `<script>` block.
///
/// One delegated click listener on the instance root, instead of per-toggle
/// inline handlers: any click that lands on (or inside) a `.collapsible`
/// flips the `collapsed` class of its sibling content block and swaps the
/// glyph. The initial collapse state is already baked into the markup by the
/// Renderer, so the script only handles transitions.
fn generate_script(root: &str) -> String {
    format!(
        r#"<script>
(function () {{
    var root = document.getElementById("{root}");
    if (!root) return;
    root.addEventListener("click", function (ev) {{
        var toggle = ev.target.closest(".collapsible");
        if (!toggle || !root.contains(toggle)) return;
        var content = toggle.nextElementSibling;
        if (!content) return;
        content.classList.toggle("collapsed");
        toggle.textContent = content.classList.contains("collapsed") ? "▶" : "▼";
    }});
}})();
</script>
"#,
        root = root,
    )
}
