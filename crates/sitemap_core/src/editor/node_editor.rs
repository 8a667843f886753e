//! Page node editor.
//!
//! # Responsibility
//! - Edit one page's label (click-to-edit, commit on blur).
//! - Apply section intents and propagate each resulting sequence upward.
//!
//! # Invariants
//! - An editor cannot exist without an `UpdateChannel`.
//! - Each committed change is computed once; the same value becomes the
//!   snapshot and the channel payload.
//! - No-op section operations do not touch the channel.
//! - The snapshot only takes a sequence the channel accepted.

use crate::channel::UpdateChannel;
use crate::config::DEFAULT_SECTION_LABEL;
use crate::editor::edit_buffer::EditBuffer;
use crate::editor::section_item::{SectionIntent, SectionItem};
use crate::editor::section_list::{self, MoveDirection};
use crate::error::{SitemapError, SitemapResult};
use crate::id::IdGenerator;
use crate::model::page::PageNode;
use crate::model::section::{Section, SectionId};
use log::{debug, error};

/// Editor over a snapshot of one page.
pub struct NodeEditor<'a, C: UpdateChannel + ?Sized> {
    channel: &'a mut C,
    ids: &'a mut dyn IdGenerator,
    view: PageNode,
    label_edit: EditBuffer,
    section_label: String,
}

impl<'a, C: UpdateChannel + ?Sized> NodeEditor<'a, C> {
    /// Creates an editor over `view` committing through `channel`.
    pub fn new(channel: &'a mut C, ids: &'a mut dyn IdGenerator, view: PageNode) -> Self {
        Self {
            channel,
            ids,
            view,
            label_edit: EditBuffer::default(),
            section_label: DEFAULT_SECTION_LABEL.to_string(),
        }
    }

    /// Creates an editor from an optional enclosing channel.
    ///
    /// # Errors
    /// - Returns `MissingContext` when `scope` is `None`, before the snapshot
    ///   is used for anything.
    pub fn from_scope(
        scope: Option<&'a mut C>,
        ids: &'a mut dyn IdGenerator,
        view: PageNode,
    ) -> SitemapResult<Self> {
        let Some(channel) = scope else {
            error!(
                "event=editor_mount module=editor status=error error_code=missing_context node_id={}",
                view.id
            );
            return Err(SitemapError::MissingContext {
                component: "NodeEditor",
            });
        };
        Ok(Self::new(channel, ids, view))
    }

    /// Overrides the label given to sections created by `add_section`.
    pub fn with_section_label(mut self, label: impl Into<String>) -> Self {
        self.section_label = label.into();
        self
    }

    pub fn node_id(&self) -> &str {
        &self.view.id
    }

    pub fn view(&self) -> &PageNode {
        &self.view
    }

    pub fn sections(&self) -> &[Section] {
        &self.view.sections
    }

    /// Builds section item views in display order.
    pub fn items(&self) -> Vec<SectionItem> {
        self.view
            .sections
            .iter()
            .map(SectionItem::from_section)
            .collect()
    }

    /// Text shown in the page header.
    pub fn display_label(&self) -> &str {
        self.label_edit.text().unwrap_or(&self.view.label)
    }

    pub fn is_editing_label(&self) -> bool {
        self.label_edit.is_editing()
    }

    pub fn click_label(&mut self) {
        self.label_edit.begin(&self.view.label);
    }

    pub fn input_label(&mut self, text: impl Into<String>) {
        self.label_edit.input(text);
    }

    /// Focus loss on the label field: commits the label through the channel.
    ///
    /// Returns `false` when not editing or when the channel did not apply it.
    pub fn blur_label(&mut self) -> bool {
        let Some(label) = self.label_edit.commit() else {
            return false;
        };
        self.view.label = label.clone();
        let applied = self.channel.update_label(&self.view.id, label);
        debug!(
            "event=label_commit module=editor status={} node_id={}",
            status(applied),
            self.view.id
        );
        applied
    }

    /// Moves a section one step. Returns whether the channel took the new order.
    pub fn move_section(&mut self, section_id: &str, direction: MoveDirection) -> bool {
        let next = section_list::move_section(&self.view.sections, section_id, direction);
        self.commit_sections("section_move", section_id, next)
    }

    /// Renames a section. Returns whether the section exists and the channel
    /// took the change.
    pub fn rename_section(&mut self, section_id: &str, label: &str) -> bool {
        let next = section_list::rename_section(&self.view.sections, section_id, label);
        self.commit_sections("section_rename", section_id, next)
    }

    /// Appends a default section and returns its id.
    ///
    /// # Errors
    /// - Returns `IdExhausted` when no unused id can be generated.
    /// - Returns `UpdateRejected` when the channel refuses the new sequence.
    pub fn add_section(&mut self) -> SitemapResult<SectionId> {
        let next = section_list::add_section(&self.view.sections, self.ids, &self.section_label)?;
        let section_id = next
            .last()
            .map(|section| section.id.clone())
            .unwrap_or_default();
        if !self.commit_sections("section_add", &section_id, Some(next)) {
            return Err(SitemapError::UpdateRejected {
                node_id: self.view.id.clone(),
            });
        }
        Ok(section_id)
    }

    /// Deletes a section. Returns whether it existed and the channel took the
    /// change.
    pub fn delete_section(&mut self, section_id: &str) -> bool {
        let next = section_list::delete_section(&self.view.sections, section_id);
        self.commit_sections("section_delete", section_id, next)
    }

    /// Applies one section intent. Returns whether the sequence changed.
    pub fn handle(&mut self, intent: SectionIntent) -> SitemapResult<bool> {
        let changed = match intent {
            SectionIntent::Move {
                section_id,
                direction,
            } => self.move_section(&section_id, direction),
            SectionIntent::Rename { section_id, label } => {
                self.rename_section(&section_id, &label)
            }
            SectionIntent::Delete { section_id } => self.delete_section(&section_id),
            SectionIntent::Add => match self.add_section() {
                Ok(_) => true,
                Err(SitemapError::UpdateRejected { .. }) => false,
                Err(err) => return Err(err),
            },
        };
        Ok(changed)
    }

    /// Consumes the editor and returns its final snapshot.
    pub fn into_view(self) -> PageNode {
        self.view
    }

    fn commit_sections(
        &mut self,
        event: &str,
        section_id: &str,
        next: Option<Vec<Section>>,
    ) -> bool {
        let Some(next) = next else {
            debug!(
                "event={event} module=editor status=noop node_id={} section_id={section_id}",
                self.view.id
            );
            return false;
        };

        if !self.channel.update_children(&self.view.id, next.clone()) {
            debug!(
                "event={event} module=editor status=rejected node_id={} section_id={section_id}",
                self.view.id
            );
            return false;
        }
        self.view.sections = next;
        debug!(
            "event={event} module=editor status=ok node_id={} section_id={section_id} sections={}",
            self.view.id,
            self.view.sections.len()
        );
        true
    }
}

fn status(applied: bool) -> &'static str {
    if applied {
        "ok"
    } else {
        "noop"
    }
}
