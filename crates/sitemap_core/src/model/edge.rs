//! Edge record connecting two pages.

use crate::model::page::NodeId;
use serde::{Deserialize, Serialize};

/// Identifier of one edge.
pub type EdgeId = String;

/// Stroke width applied to edges created by `connect` and the seed sitemap.
pub const DEFAULT_STROKE_WIDTH: u32 = 4;

/// Visual style of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke_width: u32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Connection rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeLine {
    #[default]
    Bezier,
    SmoothStep,
    Step,
    Straight,
}

impl EdgeLine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::SmoothStep => "smoothstep",
            Self::Step => "step",
            Self::Straight => "straight",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bezier" => Some(Self::Bezier),
            "smoothstep" => Some(Self::SmoothStep),
            "step" => Some(Self::Step),
            "straight" => Some(Self::Straight),
            _ => None,
        }
    }
}

/// Directed connection from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub style: EdgeStyle,
    #[serde(rename = "type")]
    pub line: EdgeLine,
    #[serde(default)]
    pub selected: bool,
}

impl Edge {
    /// Creates an edge with the conventional `e{source}-{target}` id.
    pub fn between(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        style: EdgeStyle,
        line: EdgeLine,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            style,
            line,
            selected: false,
        }
    }

    /// Returns whether either endpoint is `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Builds the edge id used for a `source -> target` connection.
pub fn edge_id(source: &str, target: &str) -> EdgeId {
    format!("e{source}-{target}")
}
