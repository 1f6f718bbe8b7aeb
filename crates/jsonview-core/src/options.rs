//! Caller-supplied rendering configuration.

/// Options controlling how a JSON document is rendered.
///
/// Carried by shared reference through every recursive call; never mutated.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Optional title displayed above the viewer. HTML-escaped on output.
    pub title: Option<String>,
    /// Maximum nesting depth to render before truncating. `None` = unlimited.
    ///
    /// Without a limit, call-stack depth tracks input nesting depth; callers
    /// handing over pathologically deep documents should set this.
    pub max_depth: Option<usize>,
    /// Whether collapsible regions start in the collapsed state.
    pub collapsed: bool,
    /// Indentation per nesting level, in pixels.
    pub indent_size: u32,
    /// Use the dark color palette instead of the light one.
    pub dark_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            max_depth: None,
            collapsed: false,
            indent_size: 24,
            dark_mode: false,
        }
    }
}
