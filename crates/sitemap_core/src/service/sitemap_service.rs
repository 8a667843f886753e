//! Sitemap save/load use-case service.
//!
//! # Responsibility
//! - Hand the canvas snapshot to a repository and report the outcome as a
//!   user-facing notification.
//! - Restore a canvas from the stored snapshot.
//!
//! # Invariants
//! - Save failures never escape as errors; they become `Failure`
//!   notifications carrying the underlying message.
//! - Saves are attempted exactly once; there is no retry.

use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::id::{CounterIds, NODE_ID_PREFIX};
use crate::placement::RandomPlacement;
use crate::repo::sitemap_repo::{RepoResult, SitemapRepository};
use log::{error, info};

const SAVE_SUCCESS_MESSAGE: &str = "Sitemap saved successfully";

/// Outcome of a save, shaped for a toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveNotification {
    Success { message: String },
    Failure { message: String },
}

impl SaveNotification {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message } => message,
        }
    }
}

/// Save/load facade over a repository implementation.
pub struct SitemapService<R: SitemapRepository> {
    repo: R,
}

impl<R: SitemapRepository> SitemapService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves the current canvas state.
    pub fn save(&self, canvas: &Canvas) -> SaveNotification {
        let snapshot = canvas.snapshot();
        match self.repo.save(&snapshot) {
            Ok(()) => {
                info!(
                    "event=sitemap_save module=service status=ok nodes={} edges={}",
                    snapshot.nodes.len(),
                    snapshot.edges.len()
                );
                SaveNotification::Success {
                    message: SAVE_SUCCESS_MESSAGE.to_string(),
                }
            }
            Err(err) => {
                error!(
                    "event=sitemap_save module=service status=error error_code=save_failed error={err}"
                );
                SaveNotification::Failure {
                    message: format!("Error saving sitemap: {err}"),
                }
            }
        }
    }

    /// Loads the stored sitemap into a new canvas.
    ///
    /// New page ids continue after the highest stored `node-N` id.
    pub fn load(&self, config: CanvasConfig) -> RepoResult<Option<Canvas>> {
        let Some(snapshot) = self.repo.load()? else {
            return Ok(None);
        };
        let existing = snapshot.nodes.iter().flat_map(|node| {
            std::iter::once(node.id.as_str())
                .chain(node.sections.iter().map(|section| section.id.as_str()))
        });
        let node_ids = CounterIds::resume(NODE_ID_PREFIX, existing);
        Ok(Some(Canvas::from_snapshot(
            config,
            Box::new(node_ids),
            Box::new(RandomPlacement::new()),
            snapshot,
        )))
    }
}
