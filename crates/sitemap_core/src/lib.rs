//! Core state model for the sitemap wireframe editor.
//!
//! The canvas owns every page and edge. Editors work on snapshots and
//! commit through the `UpdateChannel` they are constructed with.

pub mod canvas;
pub mod channel;
pub mod config;
pub mod db;
pub mod editor;
pub mod error;
pub mod id;
pub mod logging;
pub mod model;
pub mod placement;
pub mod repo;
pub mod service;

pub use canvas::{Canvas, EdgeChange, NodeChange};
pub use channel::{RecordingChannel, UpdateChannel, UpdateIntent};
pub use config::{CanvasConfig, Viewport};
pub use editor::node_editor::NodeEditor;
pub use editor::section_item::{SectionIntent, SectionItem};
pub use editor::section_list::MoveDirection;
pub use editor::text_updater::TextUpdaterField;
pub use error::{SitemapError, SitemapResult};
pub use id::{CounterIds, IdGenerator, UuidIds};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::edge::{Edge, EdgeId, EdgeLine, EdgeStyle};
pub use model::page::{Dimensions, NodeId, NodeKind, PageNode, Position};
pub use model::section::{Section, SectionId};
pub use model::snapshot::SitemapSnapshot;
pub use placement::{FixedPlacement, Placement, RandomPlacement};
pub use repo::sitemap_repo::{
    NoopSitemapRepository, RepoError, RepoResult, SitemapRepository, SqliteSitemapRepository,
};
pub use service::sitemap_service::{SaveNotification, SitemapService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
