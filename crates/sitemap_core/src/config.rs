//! Canvas configuration.
//!
//! # Invariants
//! - `Default` reproduces the editor's stock behavior: "New Section" for new
//!   sections, "Page {n}" for new pages, 4px smoothstep edges.

use crate::model::edge::{EdgeLine, EdgeStyle};

pub const DEFAULT_SECTION_LABEL: &str = "New Section";
pub const DEFAULT_PAGE_LABEL_PREFIX: &str = "Page";

/// Visible canvas area used to place new pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Tunables for one canvas session.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub viewport: Viewport,
    /// Label given to sections created by `add`.
    pub default_section_label: String,
    /// Prefix of auto-numbered page labels.
    pub page_label_prefix: String,
    /// Style applied to edges created by `connect`.
    pub edge_style: EdgeStyle,
    /// Rendering mode applied to edges created by `connect`.
    pub edge_line: EdgeLine,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            default_section_label: DEFAULT_SECTION_LABEL.to_string(),
            page_label_prefix: DEFAULT_PAGE_LABEL_PREFIX.to_string(),
            edge_style: EdgeStyle::default(),
            edge_line: EdgeLine::SmoothStep,
        }
    }
}

impl CanvasConfig {
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    /// Returns the label for a page created when `existing` pages are present.
    pub fn page_label(&self, existing: usize) -> String {
        format!("{} {existing}", self.page_label_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasConfig;
    use crate::model::edge::EdgeLine;

    #[test]
    fn default_config_matches_stock_editor() {
        let config = CanvasConfig::default();
        assert_eq!(config.default_section_label, "New Section");
        assert_eq!(config.edge_style.stroke_width, 4);
        assert_eq!(config.edge_line, EdgeLine::SmoothStep);
        assert_eq!(config.page_label(3), "Page 3");
    }
}
