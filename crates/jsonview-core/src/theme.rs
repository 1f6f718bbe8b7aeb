//! Fixed light and dark color palettes for the viewer.
//!
//! Each palette is an enumerated table of named colors covering every styled
//! element of the output: scalar token colors, key/separator colors, the
//! collapse-toggle surface, and the hover/shadow tints.

/// Named colors for one viewer palette. All values are CSS color literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
    pub string: &'static str,
    pub number: &'static str,
    pub boolean: &'static str,
    pub null: &'static str,
    pub key: &'static str,
    /// Separator line under the title block.
    pub line: &'static str,
    pub collapsible_bg: &'static str,
    pub collapsible_hover: &'static str,
    pub collapsible_border: &'static str,
    /// Row highlight when hovering a property.
    pub property_hover: &'static str,
    pub shadow: &'static str,
}

impl Theme {
    /// Select the palette for the given mode.
    pub fn select(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Light palette (default).
    pub fn light() -> Self {
        Self {
            background: "#f8f9fa",
            text: "#2c3e50",
            string: "#28a745",
            number: "#0066cc",
            boolean: "#e83e8c",
            null: "#6c757d",
            key: "#2c3e50",
            line: "#dee2e6",
            collapsible_bg: "#e9ecef",
            collapsible_hover: "#dee2e6",
            collapsible_border: "#ced4da",
            property_hover: "rgba(0,0,0,0.02)",
            shadow: "rgba(0,0,0,0.05)",
        }
    }

    /// Dark palette, tuned for dark notebook themes.
    pub fn dark() -> Self {
        Self {
            background: "#1e1e1e",
            text: "#d4d4d4",
            string: "#6A9955",
            number: "#569CD6",
            boolean: "#C586C0",
            null: "#808080",
            key: "#4EC9B0",
            line: "#404040",
            collapsible_bg: "#2d2d2d",
            collapsible_hover: "#383838",
            collapsible_border: "#404040",
            property_hover: "rgba(255,255,255,0.02)",
            shadow: "rgba(0,0,0,0.2)",
        }
    }
}
