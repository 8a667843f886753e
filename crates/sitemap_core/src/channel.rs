//! Shared update channel.
//!
//! # Responsibility
//! - Define the only route by which editors commit label and section-list
//!   changes to the authoritative page collection.
//!
//! # Invariants
//! - Both operations are no-ops when `node_id` is unknown.
//! - `update_children` replaces the whole sequence; nothing is merged.
//! - Dispatch is synchronous and follows call order.

use crate::model::page::NodeId;
use crate::model::section::Section;

/// Handle passed to editors at construction time.
///
/// Return values report whether a page was rewritten.
pub trait UpdateChannel {
    fn update_label(&mut self, node_id: &str, label: String) -> bool;
    fn update_children(&mut self, node_id: &str, sections: Vec<Section>) -> bool;
}

/// One committed update, as sent through an `UpdateChannel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateIntent {
    Label { node_id: NodeId, label: String },
    Children { node_id: NodeId, sections: Vec<Section> },
}

impl UpdateIntent {
    pub fn node_id(&self) -> &str {
        match self {
            Self::Label { node_id, .. } | Self::Children { node_id, .. } => node_id,
        }
    }

    /// Sends this intent through `channel`.
    pub fn dispatch<C: UpdateChannel + ?Sized>(self, channel: &mut C) -> bool {
        match self {
            Self::Label { node_id, label } => channel.update_label(&node_id, label),
            Self::Children { node_id, sections } => channel.update_children(&node_id, sections),
        }
    }
}

/// Channel that queues intents instead of applying them.
///
/// Lets an editor run detached from the canvas; the queue is replayed later
/// in call order.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    intents: Vec<UpdateIntent>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> &[UpdateIntent] {
        &self.intents
    }

    /// Replays queued intents into `channel`, returning how many applied.
    pub fn replay_into<C: UpdateChannel + ?Sized>(self, channel: &mut C) -> usize {
        let mut applied = 0;
        for intent in self.intents {
            if intent.dispatch(channel) {
                applied += 1;
            }
        }
        applied
    }
}

impl UpdateChannel for RecordingChannel {
    fn update_label(&mut self, node_id: &str, label: String) -> bool {
        self.intents.push(UpdateIntent::Label {
            node_id: node_id.to_string(),
            label,
        });
        true
    }

    fn update_children(&mut self, node_id: &str, sections: Vec<Section>) -> bool {
        self.intents.push(UpdateIntent::Children {
            node_id: node_id.to_string(),
            sections,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordingChannel, UpdateChannel, UpdateIntent};
    use crate::model::section::Section;

    #[test]
    fn recording_channel_keeps_call_order() {
        let mut channel = RecordingChannel::new();
        channel.update_label("node-0", "Home".to_string());
        channel.update_children("node-0", vec![Section::new("s-0", "Navbar")]);

        let intents = channel.intents();
        assert_eq!(intents.len(), 2);
        assert!(matches!(&intents[0], UpdateIntent::Label { label, .. } if label == "Home"));
        assert!(matches!(&intents[1], UpdateIntent::Children { sections, .. } if sections.len() == 1));
        assert_eq!(intents[1].node_id(), "node-0");
    }
}
