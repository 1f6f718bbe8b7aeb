//! # jsonview-core
//!
//! Collapsible, syntax-highlighted HTML rendering of JSON documents for
//! notebook display surfaces.
//!
//! Given a JSON value, the crate produces a self-contained HTML document:
//! a per-instance `<style>` block, a delegated-listener `<script>` block,
//! and a nested markup tree mirroring the value's structure, with collapse
//! toggles on every non-empty container and positional marker glyphs on
//! every row. Instance ids keep any number of viewers isolated on one page.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonview_core::{render_html, RenderOptions};
//!
//! let html = render_html(r#"{"name":"Alice","scores":[95,87,92]}"#, &RenderOptions::default()).unwrap();
//! assert!(html.contains(r#"<span class="json-key">"name"</span>"#));
//! ```
//!
//! ## Modules
//!
//! - [`render`] — pure value → HTML-fragment renderer
//! - [`document`] — document assembly, instance ids, the [`DisplayChannel`] seam
//! - [`theme`] — fixed light/dark color palettes
//! - [`options`] — [`RenderOptions`] configuration struct
//! - [`escape`] — HTML escaping for interpolated text
//! - [`error`] — error types

pub mod document;
pub mod error;
pub mod escape;
pub mod options;
pub mod render;
pub mod theme;

pub use document::{display_json, render_document, render_html, DisplayChannel, ViewerInstanceId};
pub use error::ViewerError;
pub use options::RenderOptions;
pub use render::{render_fragment, render_value};
pub use theme::Theme;
