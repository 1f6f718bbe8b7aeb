//! # jsonview-python
//!
//! Python bindings for the jsonview notebook JSON viewer, built with PyO3.
//!
//! Exposes the following functions to Python as the `jupyter_json_viewer`
//! module:
//!
//! - `display_json(data, ...)` -- render and show inline via IPython's
//!   rich-display mechanism
//! - `render_html(data, ...)` -- render to an HTML string without displaying
//!
//! `data` is any JSON-serializable Python object (dict, list, str, int,
//! float, bool, None). Serialization goes through the stdlib `json.dumps`,
//! so dict insertion order carries through to the rendered output.

use jsonview_core::{DisplayChannel, RenderOptions, ViewerError};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Build core options from the flat keyword-argument surface Python sees.
fn build_options(
    title: Option<String>,
    max_depth: Option<usize>,
    collapsed: bool,
    indent_size: u32,
    dark_mode: bool,
) -> RenderOptions {
    RenderOptions {
        title,
        max_depth,
        collapsed,
        indent_size,
        dark_mode,
    }
}

/// Serialize a Python object to a JSON string via the stdlib `json.dumps`.
///
/// Objects outside the JSON sum type (sets, custom classes) are an
/// input-contract violation: `dumps` raises, and the error surfaces as a
/// `ValueError` rather than being coerced to some scalar form.
fn to_json_string(data: &Bound<'_, PyAny>) -> PyResult<String> {
    let py = data.py();
    let dumps = py.import("json")?.getattr("dumps")?;
    dumps
        .call1((data,))
        .map_err(|e| PyValueError::new_err(format!("data is not JSON-serializable: {e}")))?
        .extract()
}

/// Display channel backed by `IPython.display.display(HTML(...))` — the
/// rich-display hand-off a Jupyter kernel exposes.
struct IpythonDisplay<'py> {
    py: Python<'py>,
}

impl DisplayChannel for IpythonDisplay<'_> {
    fn display(
        &mut self,
        markup: &str,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let py = self.py;
        let send = || -> PyResult<()> {
            let display_mod = py.import("IPython.display")?;
            let html = display_mod.getattr("HTML")?.call1((markup,))?;
            display_mod.getattr("display")?.call1((html,))?;
            Ok(())
        };
        send().map_err(|e| Box::new(e) as _)
    }
}

/// Map core errors onto the Python exception surface: bad input is a
/// `ValueError`, a failed display hand-off is a `RuntimeError`.
fn to_py_err(err: ViewerError) -> PyErr {
    match err {
        ViewerError::JsonParse(_) => PyValueError::new_err(err.to_string()),
        ViewerError::Display { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Render a JSON-serializable object to a complete viewer HTML document.
///
/// Args:
///     data: The data to render (dict, list, or any JSON-serializable object).
///     title: Optional title shown above the viewer (HTML-escaped).
///     max_depth: Maximum nesting depth before truncating. None = unlimited.
///     collapsed: Whether collapsible regions start collapsed.
///     indent_size: Indentation per nesting level, in pixels.
///     dark_mode: Use the dark color palette.
///
/// Returns:
///     The HTML document string.
///
/// Raises:
///     ValueError: If the data is not JSON-serializable.
#[pyfunction]
#[pyo3(signature = (data, title=None, max_depth=None, collapsed=false, indent_size=24, dark_mode=false))]
fn render_html(
    data: &Bound<'_, PyAny>,
    title: Option<String>,
    max_depth: Option<usize>,
    collapsed: bool,
    indent_size: u32,
    dark_mode: bool,
) -> PyResult<String> {
    let json = to_json_string(data)?;
    let options = build_options(title, max_depth, collapsed, indent_size, dark_mode);
    jsonview_core::render_html(&json, &options).map_err(to_py_err)
}

/// Render a JSON-serializable object and display it inline in the running
/// notebook.
///
/// Makes exactly one call into IPython's rich-display mechanism.
///
/// Args:
///     data: The data to display (dict, list, or any JSON-serializable object).
///     title: Optional title shown above the viewer (HTML-escaped).
///     max_depth: Maximum nesting depth before truncating. None = unlimited.
///     collapsed: Whether collapsible regions start collapsed.
///     indent_size: Indentation per nesting level, in pixels.
///     dark_mode: Use the dark color palette.
///
/// Raises:
///     ValueError: If the data is not JSON-serializable.
///     RuntimeError: If the display hand-off fails (e.g. no IPython present).
#[pyfunction]
#[pyo3(signature = (data, title=None, max_depth=None, collapsed=false, indent_size=24, dark_mode=false))]
fn display_json(
    data: &Bound<'_, PyAny>,
    title: Option<String>,
    max_depth: Option<usize>,
    collapsed: bool,
    indent_size: u32,
    dark_mode: bool,
) -> PyResult<()> {
    let json = to_json_string(data)?;
    let options = build_options(title, max_depth, collapsed, indent_size, dark_mode);
    let mut channel = IpythonDisplay { py: data.py() };
    jsonview_core::display_json(&json, &options, &mut channel).map_err(to_py_err)
}

/// The `jupyter_json_viewer` Python module, implemented in Rust via PyO3.
#[pymodule]
fn jupyter_json_viewer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render_html, m)?)?;
    m.add_function(wrap_pyfunction!(display_json, m)?)?;
    Ok(())
}
