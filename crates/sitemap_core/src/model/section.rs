//! Section (child item) record.
//!
//! # Invariants
//! - `id` is unique within the owning page.
//! - `highlighted` defaults to `false`.

use serde::{Deserialize, Serialize};

/// Identifier of one section inside a page.
pub type SectionId = String;

/// One reorderable, editable sub-section of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub highlighted: bool,
}

impl Section {
    /// Creates a plain, non-highlighted section without description.
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            highlighted: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}
