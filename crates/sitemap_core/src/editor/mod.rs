//! Page and section editors.
//!
//! # Responsibility
//! - Turn user interactions into section-list and label intents.
//! - Commit every change through an injected `UpdateChannel`.
//!
//! # Invariants
//! - Editors never act as the system of record; they hold snapshots.
//! - The snapshot and the propagated value come from one computed sequence.

pub mod edit_buffer;
pub mod node_editor;
pub mod section_item;
pub mod section_list;
pub mod text_updater;
