//! Canvas controller.
//!
//! # Responsibility
//! - Own the authoritative page and edge collections.
//! - Ingest render-surface changes, connections and page creation.
//! - Implement the `UpdateChannel` editors commit through.
//!
//! # Invariants
//! - Page ids are unique; edge ids are unique.
//! - Removing a page removes every edge touching it.
//! - Edges created by `connect` join two existing, distinct pages and are
//!   never duplicated.
//! - Section lists accepted through the channel have unique ids.

use crate::channel::UpdateChannel;
use crate::config::CanvasConfig;
use crate::editor::node_editor::NodeEditor;
use crate::editor::section_list::has_unique_ids;
use crate::error::SitemapResult;
use crate::id::{fresh_id, CounterIds, IdGenerator, NODE_ID_PREFIX};
use crate::model::edge::{edge_id, Edge, EdgeId};
use crate::model::page::{Dimensions, NodeId, NodeKind, PageNode, Position};
use crate::model::section::Section;
use crate::model::snapshot::SitemapSnapshot;
use crate::placement::{Placement, RandomPlacement};
use log::{debug, info, warn};

const SEED_PAGE_LABEL: &str = "Home";
const SEED_SECTION_LABELS: [&str; 3] = ["Navbar", "Hero Header Section", "Hero Header Section 2"];

/// Structural change reported by the render surface for one page.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    /// Drag update. `position` is `None` when only the drag flag changes.
    Position {
        id: NodeId,
        position: Option<Position>,
        dragging: bool,
    },
    Dimensions {
        id: NodeId,
        dimensions: Dimensions,
    },
    Select {
        id: NodeId,
        selected: bool,
    },
    Remove {
        id: NodeId,
    },
    Add {
        node: PageNode,
    },
}

/// Structural change reported by the render surface for one edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeChange {
    Select { id: EdgeId, selected: bool },
    Remove { id: EdgeId },
    Add { edge: Edge },
}

/// Authoritative sitemap state for one editing session.
pub struct Canvas {
    config: CanvasConfig,
    nodes: Vec<PageNode>,
    edges: Vec<Edge>,
    node_ids: Box<dyn IdGenerator>,
    placement: Box<dyn Placement>,
}

impl Canvas {
    /// Creates an empty canvas with `node-N` ids and random placement.
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_generators(
            config,
            Box::new(CounterIds::new(NODE_ID_PREFIX)),
            Box::new(RandomPlacement::new()),
        )
    }

    /// Creates an empty canvas with injected id and placement sources.
    pub fn with_generators(
        config: CanvasConfig,
        node_ids: Box<dyn IdGenerator>,
        placement: Box<dyn Placement>,
    ) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_ids,
            placement,
        }
    }

    /// Creates the starter sitemap: one `Home` page with three sections.
    pub fn seeded(config: CanvasConfig) -> SitemapResult<Self> {
        let mut canvas = Self::new(config);
        canvas.seed()?;
        Ok(canvas)
    }

    /// Adds the starter `Home` page at the origin and returns its id.
    ///
    /// Section ids come from the canvas id generator.
    pub fn seed(&mut self) -> SitemapResult<NodeId> {
        let node_id = self.next_node_id()?;
        let mut sections = Vec::with_capacity(SEED_SECTION_LABELS.len());
        for label in SEED_SECTION_LABELS {
            let id = self.next_node_id()?;
            sections.push(Section::new(id, label));
        }
        let node = PageNode::new(node_id.clone(), SEED_PAGE_LABEL, Position::default())
            .with_sections(sections);
        self.nodes.push(node);
        info!("event=canvas_seed module=canvas status=ok node_id={node_id}");
        Ok(node_id)
    }

    /// Restores a canvas from a stored snapshot.
    ///
    /// Edges whose endpoints are missing from the snapshot are dropped.
    pub fn from_snapshot(
        config: CanvasConfig,
        node_ids: Box<dyn IdGenerator>,
        placement: Box<dyn Placement>,
        snapshot: SitemapSnapshot,
    ) -> Self {
        let mut canvas = Self::with_generators(config, node_ids, placement);
        canvas.nodes = snapshot.nodes;
        let edge_total = snapshot.edges.len();
        let edges: Vec<Edge> = snapshot
            .edges
            .into_iter()
            .filter(|edge| canvas.contains_node(&edge.source) && canvas.contains_node(&edge.target))
            .collect();
        canvas.edges = edges;
        let dropped = edge_total - canvas.edges.len();
        if dropped > 0 {
            warn!("event=canvas_restore module=canvas status=partial dropped_edges={dropped}");
        }
        info!(
            "event=canvas_restore module=canvas status=ok nodes={} edges={}",
            canvas.nodes.len(),
            canvas.edges.len()
        );
        canvas
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[PageNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&PageNode> {
        self.nodes.iter().find(|node| node.id == node_id)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == edge_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    /// Copies the current collections for persistence.
    pub fn snapshot(&self) -> SitemapSnapshot {
        SitemapSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Appends a `customNode` page labelled `"{prefix} {n}"`, where `n` is the
    /// page count before insertion.
    ///
    /// # Errors
    /// - Returns `IdExhausted` when no unused page id can be generated.
    pub fn add_node(&mut self) -> SitemapResult<NodeId> {
        self.add_node_of_kind(NodeKind::CustomNode)
    }

    /// Appends a page of `kind` placed by the injected placement.
    pub fn add_node_of_kind(&mut self, kind: NodeKind) -> SitemapResult<NodeId> {
        let node_id = self.next_node_id()?;
        let label = self.config.page_label(self.nodes.len());
        let position = self.placement.place(self.config.viewport);
        self.nodes
            .push(PageNode::new(node_id.clone(), label, position).with_kind(kind));
        info!(
            "event=node_add module=canvas status=ok node_id={node_id} kind={} nodes={}",
            kind.as_str(),
            self.nodes.len()
        );
        Ok(node_id)
    }

    /// Removes a page and every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        let Some(index) = self.nodes.iter().position(|node| node.id == node_id) else {
            return false;
        };
        self.nodes.remove(index);
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(node_id));
        info!(
            "event=node_remove module=canvas status=ok node_id={node_id} removed_edges={}",
            before - self.edges.len()
        );
        true
    }

    /// Connects `source` to `target` with the configured style and line mode.
    ///
    /// Returns `None` when either page is missing, when `source == target`,
    /// or when the connection already exists.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<EdgeId> {
        if source == target || !self.contains_node(source) || !self.contains_node(target) {
            debug!(
                "event=edge_connect module=canvas status=rejected source={source} target={target}"
            );
            return None;
        }
        let id = edge_id(source, target);
        let duplicate = self
            .edges
            .iter()
            .any(|edge| edge.id == id || (edge.source == source && edge.target == target));
        if duplicate {
            debug!("event=edge_connect module=canvas status=duplicate edge_id={id}");
            return None;
        }

        self.edges.push(Edge::between(
            source,
            target,
            self.config.edge_style,
            self.config.edge_line,
        ));
        info!("event=edge_connect module=canvas status=ok edge_id={id}");
        Some(id)
    }

    /// Applies render-surface page changes in order.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        for change in changes {
            match change {
                NodeChange::Position {
                    id,
                    position,
                    dragging,
                } => {
                    if let Some(node) = self.node_mut(id) {
                        if let Some(position) = position {
                            node.position = *position;
                        }
                        node.dragging = *dragging;
                    }
                }
                NodeChange::Dimensions { id, dimensions } => {
                    if let Some(node) = self.node_mut(id) {
                        node.dimensions = Some(*dimensions);
                    }
                }
                NodeChange::Select { id, selected } => {
                    if let Some(node) = self.node_mut(id) {
                        node.selected = *selected;
                    }
                }
                NodeChange::Remove { id } => {
                    self.remove_node(id);
                }
                NodeChange::Add { node } => {
                    if self.contains_node(&node.id) {
                        warn!(
                            "event=node_add module=canvas status=rejected error_code=duplicate_id node_id={}",
                            node.id
                        );
                        continue;
                    }
                    if !has_unique_ids(&node.sections) {
                        warn!(
                            "event=node_add module=canvas status=rejected error_code=duplicate_section_id node_id={}",
                            node.id
                        );
                        continue;
                    }
                    self.nodes.push(node.clone());
                }
            }
        }
    }

    /// Applies render-surface edge changes in order.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        for change in changes {
            match change {
                EdgeChange::Select { id, selected } => {
                    if let Some(edge) = self.edges.iter_mut().find(|edge| edge.id == *id) {
                        edge.selected = *selected;
                    }
                }
                EdgeChange::Remove { id } => {
                    self.edges.retain(|edge| edge.id != *id);
                }
                EdgeChange::Add { edge } => {
                    if self.edge(&edge.id).is_some() {
                        warn!(
                            "event=edge_add module=canvas status=rejected error_code=duplicate_id edge_id={}",
                            edge.id
                        );
                        continue;
                    }
                    self.edges.push(edge.clone());
                }
            }
        }
    }

    /// Opens an editor over a snapshot of one page, committing back here.
    ///
    /// Returns `None` when the page does not exist.
    pub fn edit_node<'a>(
        &'a mut self,
        node_id: &str,
        section_ids: &'a mut dyn IdGenerator,
    ) -> Option<NodeEditor<'a, Self>> {
        let view = self.node(node_id)?.clone();
        let section_label = self.config.default_section_label.clone();
        Some(NodeEditor::new(self, section_ids, view).with_section_label(section_label))
    }

    fn node_mut(&mut self, node_id: &str) -> Option<&mut PageNode> {
        self.nodes.iter_mut().find(|node| node.id == node_id)
    }

    fn next_node_id(&mut self) -> SitemapResult<NodeId> {
        let nodes = &self.nodes;
        fresh_id(self.node_ids.as_mut(), |candidate| {
            nodes.iter().any(|node| {
                node.id == candidate || node.sections.iter().any(|section| section.id == candidate)
            })
        })
    }
}

impl UpdateChannel for Canvas {
    fn update_label(&mut self, node_id: &str, label: String) -> bool {
        let Some(node) = self.node_mut(node_id) else {
            debug!("event=update_label module=canvas status=noop node_id={node_id}");
            return false;
        };
        node.label = label;
        debug!("event=update_label module=canvas status=ok node_id={node_id}");
        true
    }

    fn update_children(&mut self, node_id: &str, sections: Vec<Section>) -> bool {
        if !has_unique_ids(&sections) {
            warn!(
                "event=update_children module=canvas status=rejected error_code=duplicate_section_id node_id={node_id}"
            );
            return false;
        }
        let Some(node) = self.node_mut(node_id) else {
            debug!("event=update_children module=canvas status=noop node_id={node_id}");
            return false;
        };
        node.sections = sections;
        debug!(
            "event=update_children module=canvas status=ok node_id={node_id} sections={}",
            node.sections.len()
        );
        true
    }
}
