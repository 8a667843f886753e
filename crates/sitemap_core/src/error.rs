//! Editor and canvas precondition errors.
//!
//! Not-found ids are never errors in this crate: move/rename/delete and the
//! update channel treat them as silent no-ops.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SitemapResult<T> = Result<T, SitemapError>;

/// Errors raised by editors and the canvas controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapError {
    /// An editor was mounted without an update channel in scope.
    MissingContext { component: &'static str },
    /// The id generator kept returning ids already in use.
    IdExhausted { attempts: usize },
    /// The update channel refused a section list for this page.
    UpdateRejected { node_id: String },
}

impl Display for SitemapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingContext { component } => write!(
                f,
                "{component} must be mounted with an update channel in scope"
            ),
            Self::IdExhausted { attempts } => write!(
                f,
                "id generator produced no unused id after {attempts} attempts"
            ),
            Self::UpdateRejected { node_id } => {
                write!(f, "section update for page `{node_id}` was rejected")
            }
        }
    }
}

impl Error for SitemapError {}
