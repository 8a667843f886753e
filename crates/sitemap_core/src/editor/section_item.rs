//! Section item view.
//!
//! Renders one section as a click-to-edit label plus move-up, move-down and
//! delete controls. The item owns only transient edit state; every control
//! yields a `SectionIntent` for the owning page editor to apply.

use crate::editor::edit_buffer::EditBuffer;
use crate::editor::section_list::MoveDirection;
use crate::model::section::{Section, SectionId};

/// Request emitted by a section control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionIntent {
    Move {
        section_id: SectionId,
        direction: MoveDirection,
    },
    Rename {
        section_id: SectionId,
        label: String,
    },
    Delete {
        section_id: SectionId,
    },
    Add,
}

/// Interactive view over one section snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionItem {
    id: SectionId,
    label: String,
    highlighted: bool,
    edit: EditBuffer,
}

impl SectionItem {
    pub fn from_section(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            label: section.label.clone(),
            highlighted: section.highlighted,
            edit: EditBuffer::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Text currently shown: the edit buffer while editing, else the label.
    pub fn display_label(&self) -> &str {
        self.edit.text().unwrap_or(&self.label)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    pub fn click_label(&mut self) {
        self.edit.begin(&self.label);
    }

    /// Keystroke in the edit field. Nothing is emitted until blur.
    pub fn input(&mut self, text: impl Into<String>) {
        self.edit.input(text);
    }

    /// Focus loss: commits the buffered label as a rename.
    pub fn blur(&mut self) -> Option<SectionIntent> {
        let label = self.edit.commit()?;
        self.label = label.clone();
        Some(SectionIntent::Rename {
            section_id: self.id.clone(),
            label,
        })
    }

    /// Unmount while editing. Returns the text that was dropped, if any.
    pub fn discard(&mut self) -> Option<String> {
        self.edit.discard()
    }

    pub fn move_up(&self) -> SectionIntent {
        self.move_intent(MoveDirection::Up)
    }

    pub fn move_down(&self) -> SectionIntent {
        self.move_intent(MoveDirection::Down)
    }

    pub fn delete(&self) -> SectionIntent {
        SectionIntent::Delete {
            section_id: self.id.clone(),
        }
    }

    fn move_intent(&self, direction: MoveDirection) -> SectionIntent {
        SectionIntent::Move {
            section_id: self.id.clone(),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionIntent, SectionItem};
    use crate::editor::section_list::MoveDirection;
    use crate::model::section::Section;

    #[test]
    fn rename_fires_on_blur_only() {
        let mut item = SectionItem::from_section(&Section::new("s-1", "Navbar"));
        item.click_label();
        item.input("Top");
        item.input("Top navigation");
        assert_eq!(item.display_label(), "Top navigation");

        let intent = item.blur().expect("blur while editing should commit");
        assert_eq!(
            intent,
            SectionIntent::Rename {
                section_id: "s-1".to_string(),
                label: "Top navigation".to_string(),
            }
        );
        assert!(item.blur().is_none());
    }

    #[test]
    fn discard_drops_unsaved_text() {
        let mut item = SectionItem::from_section(&Section::new("s-1", "Navbar"));
        item.click_label();
        item.input("half typed");
        assert_eq!(item.discard().as_deref(), Some("half typed"));
        assert_eq!(item.display_label(), "Navbar");
        assert!(item.blur().is_none());
    }

    #[test]
    fn controls_emit_intents_for_own_id() {
        let item = SectionItem::from_section(&Section::new("s-9", "Footer").highlighted(true));
        assert!(item.highlighted());
        assert_eq!(
            item.move_up(),
            SectionIntent::Move {
                section_id: "s-9".to_string(),
                direction: MoveDirection::Up,
            }
        );
        assert!(matches!(
            item.move_down(),
            SectionIntent::Move { direction: MoveDirection::Down, .. }
        ));
        assert_eq!(
            item.delete(),
            SectionIntent::Delete {
                section_id: "s-9".to_string()
            }
        );
    }
}
