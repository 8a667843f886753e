//! Live label field for `textUpdater` nodes.
//!
//! Unlike the page editor, every input change is committed immediately.

use crate::channel::UpdateChannel;
use crate::error::{SitemapError, SitemapResult};
use crate::model::page::{NodeId, PageNode};

pub struct TextUpdaterField<'a, C: UpdateChannel + ?Sized> {
    channel: &'a mut C,
    node_id: NodeId,
    value: String,
}

impl<'a, C: UpdateChannel + ?Sized> TextUpdaterField<'a, C> {
    pub fn new(channel: &'a mut C, node: &PageNode) -> Self {
        Self {
            channel,
            node_id: node.id.clone(),
            value: node.label.clone(),
        }
    }

    /// # Errors
    /// - Returns `MissingContext` when `scope` is `None`.
    pub fn from_scope(scope: Option<&'a mut C>, node: &PageNode) -> SitemapResult<Self> {
        scope
            .map(|channel| Self::new(channel, node))
            .ok_or(SitemapError::MissingContext {
                component: "TextUpdaterField",
            })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Commits `text` as the node label.
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        self.value = text.into();
        self.channel.update_label(&self.node_id, self.value.clone())
    }
}
