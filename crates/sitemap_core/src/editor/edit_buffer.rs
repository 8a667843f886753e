//! Click-to-edit text buffer shared by page and section labels.

/// Transient edit state: an editing flag plus the uncommitted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: Option<String>,
}

impl EditBuffer {
    /// Enters edit mode seeded with `current`. No-op when already editing.
    pub fn begin(&mut self, current: &str) {
        if self.text.is_none() {
            self.text = Some(current.to_string());
        }
    }

    /// Replaces the buffered text. Ignored outside edit mode.
    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(buffer) = self.text.as_mut() {
            *buffer = text.into();
        }
    }

    /// Leaves edit mode and returns the text to commit.
    pub fn commit(&mut self) -> Option<String> {
        self.text.take()
    }

    /// Leaves edit mode without committing.
    ///
    /// Leaving edit mode is the same transition as `commit`; only the caller's
    /// use of the returned text differs. It is handed back so an unmount can
    /// report what was lost.
    pub fn discard(&mut self) -> Option<String> {
        self.commit()
    }

    pub fn is_editing(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::EditBuffer;

    #[test]
    fn commit_returns_last_input() {
        let mut buffer = EditBuffer::default();
        buffer.begin("Navbar");
        buffer.input("Nav");
        buffer.input("Top nav");
        assert_eq!(buffer.commit().as_deref(), Some("Top nav"));
        assert!(!buffer.is_editing());
    }

    #[test]
    fn input_outside_edit_mode_is_ignored() {
        let mut buffer = EditBuffer::default();
        buffer.input("lost");
        assert_eq!(buffer.commit(), None);
    }

    #[test]
    fn discard_leaves_edit_mode_and_returns_dropped_text() {
        let mut buffer = EditBuffer::default();
        buffer.begin("Footer");
        buffer.input("Foot");
        assert_eq!(buffer.discard().as_deref(), Some("Foot"));
        assert!(!buffer.is_editing());
        assert_eq!(buffer.discard(), None);
    }

    #[test]
    fn begin_twice_keeps_pending_text() {
        let mut buffer = EditBuffer::default();
        buffer.begin("a");
        buffer.input("b");
        buffer.begin("a");
        assert_eq!(buffer.text(), Some("b"));
    }
}
