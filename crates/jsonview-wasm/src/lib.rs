//! WASM bindings for jsonview-core.
//!
//! Exposes `render_html` as a `#[wasm_bindgen]` function for JavaScript
//! notebook frontends that want to build the viewer document client-side.
//! Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p jsonview-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/jsonview_wasm.wasm
//! ```

use jsonview_core::RenderOptions;
use wasm_bindgen::prelude::*;

/// Render a JSON string to a complete viewer HTML document.
///
/// Returns the HTML string, or throws a JS error if the input is not valid
/// JSON. `max_depth` of `undefined` means unlimited.
#[wasm_bindgen]
pub fn render_html(
    json: &str,
    title: Option<String>,
    max_depth: Option<u32>,
    collapsed: bool,
    indent_size: u32,
    dark_mode: bool,
) -> std::result::Result<String, JsValue> {
    let options = RenderOptions {
        title,
        max_depth: max_depth.map(|d| d as usize),
        collapsed,
        indent_size,
        dark_mode,
    };
    jsonview_core::render_html(json, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
