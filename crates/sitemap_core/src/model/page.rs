//! Page (canvas node) record.
//!
//! # Responsibility
//! - Describe one canvas node: kind tag, position, label and ordered sections.
//! - Carry transient render-surface state (selection, drag, measured size).
//!
//! # Invariants
//! - `id` is unique across the canvas.
//! - Only the canvas mutates a `PageNode`; editors hold snapshot copies.

use crate::model::section::{Section, SectionId};
use serde::{Deserialize, Serialize};

/// Identifier of one page node on the canvas.
pub type NodeId = String;

/// Render dispatch tag for a node.
///
/// Serialized names match the tags the render surface registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Page card with a label and a reorderable section list.
    CustomNode,
    /// Bare label input that commits on every change.
    TextUpdater,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CustomNode => "customNode",
            Self::TextUpdater => "textUpdater",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customNode" => Some(Self::CustomNode),
            "textUpdater" => Some(Self::TextUpdater),
            _ => None,
        }
    }
}

/// Canvas coordinates in render-surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured node size reported by the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// One page node and its ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub label: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub dragging: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl PageNode {
    /// Creates a `customNode` page with no sections.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::CustomNode,
            position,
            label: label.into(),
            sections: Vec::new(),
            selected: false,
            dragging: false,
            dimensions: None,
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Looks up one section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == section_id)
    }

    /// Returns section ids in display order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|section| section.id.clone()).collect()
    }
}
