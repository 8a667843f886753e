//! Whole-sitemap value handed to persistence.

use crate::model::edge::Edge;
use crate::model::page::PageNode;
use serde::{Deserialize, Serialize};

/// Ordered node and edge collections captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitemapSnapshot {
    pub nodes: Vec<PageNode>,
    pub edges: Vec<Edge>,
}

impl SitemapSnapshot {
    pub fn section_count(&self) -> usize {
        self.nodes.iter().map(|node| node.sections.len()).sum()
    }
}
