//! Section list operations.
//!
//! Every function takes the current sequence by reference and returns the
//! next sequence, or `None` when the call is a no-op. Callers must use the
//! returned value for both their snapshot and the channel update.
//!
//! # Invariants
//! - Unknown section ids are silent no-ops.
//! - `move_section` clamps the target index to the list bounds; moving the
//!   first section up or the last section down is a no-op.
//! - Ids in the returned sequence stay unique.

use crate::error::SitemapResult;
use crate::id::{fresh_id, IdGenerator};
use crate::model::section::Section;

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Moves one section a single step, realized as remove + reinsert.
pub fn move_section(
    sections: &[Section],
    section_id: &str,
    direction: MoveDirection,
) -> Option<Vec<Section>> {
    let index = position_of(sections, section_id)?;
    let last = sections.len() - 1;
    let target = match direction {
        MoveDirection::Up => index.saturating_sub(1),
        MoveDirection::Down => (index + 1).min(last),
    };
    if target == index {
        return None;
    }

    let mut next = sections.to_vec();
    let moved = next.remove(index);
    next.insert(target, moved);
    Some(next)
}

/// Replaces the label of one section; all other fields are kept.
pub fn rename_section(sections: &[Section], section_id: &str, label: &str) -> Option<Vec<Section>> {
    let index = position_of(sections, section_id)?;
    let mut next = sections.to_vec();
    next[index].label = label.to_string();
    Some(next)
}

/// Appends a section with a fresh id and `label`.
///
/// # Errors
/// - Returns `IdExhausted` when `ids` cannot produce an unused id.
pub fn add_section(
    sections: &[Section],
    ids: &mut dyn IdGenerator,
    label: &str,
) -> SitemapResult<Vec<Section>> {
    let id = fresh_id(ids, |candidate| position_of(sections, candidate).is_some())?;
    let mut next = sections.to_vec();
    next.push(Section::new(id, label));
    Ok(next)
}

/// Removes one section.
pub fn delete_section(sections: &[Section], section_id: &str) -> Option<Vec<Section>> {
    let index = position_of(sections, section_id)?;
    let mut next = sections.to_vec();
    next.remove(index);
    Some(next)
}

/// Returns whether every section id in `sections` is distinct.
pub fn has_unique_ids(sections: &[Section]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(sections.len());
    sections.iter().all(|section| seen.insert(section.id.as_str()))
}

fn position_of(sections: &[Section], section_id: &str) -> Option<usize> {
    sections.iter().position(|section| section.id == section_id)
}

#[cfg(test)]
mod tests {
    use super::{
        add_section, delete_section, has_unique_ids, move_section, rename_section, MoveDirection,
    };
    use crate::id::CounterIds;
    use crate::model::section::Section;

    fn abc() -> Vec<Section> {
        vec![
            Section::new("a", "A"),
            Section::new("b", "B"),
            Section::new("c", "C"),
        ]
    }

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|section| section.id.as_str()).collect()
    }

    #[test]
    fn move_up_and_down_swap_neighbours() {
        let up = move_section(&abc(), "b", MoveDirection::Up).unwrap();
        assert_eq!(ids(&up), ["b", "a", "c"]);

        let down = move_section(&abc(), "b", MoveDirection::Down).unwrap();
        assert_eq!(ids(&down), ["a", "c", "b"]);
    }

    #[test]
    fn move_at_bounds_is_noop() {
        assert!(move_section(&abc(), "a", MoveDirection::Up).is_none());
        assert!(move_section(&abc(), "c", MoveDirection::Down).is_none());
    }

    #[test]
    fn move_single_section_is_noop() {
        let one = vec![Section::new("only", "Only")];
        assert!(move_section(&one, "only", MoveDirection::Up).is_none());
        assert!(move_section(&one, "only", MoveDirection::Down).is_none());
    }

    #[test]
    fn unknown_ids_are_noops() {
        assert!(move_section(&abc(), "zz", MoveDirection::Up).is_none());
        assert!(rename_section(&abc(), "zz", "X").is_none());
        assert!(delete_section(&abc(), "zz").is_none());
        assert!(move_section(&[], "zz", MoveDirection::Down).is_none());
    }

    #[test]
    fn rename_keeps_other_fields() {
        let sections = vec![Section::new("a", "A")
            .with_description("top of page")
            .highlighted(true)];
        let next = rename_section(&sections, "a", "Header").unwrap();
        assert_eq!(next[0].label, "Header");
        assert_eq!(next[0].id, "a");
        assert_eq!(next[0].description.as_deref(), Some("top of page"));
        assert!(next[0].highlighted);
    }

    #[test]
    fn add_appends_default_section_with_fresh_id() {
        let mut generator = CounterIds::new("a");
        let sections = vec![Section::new("a-0", "Existing")];
        let next = add_section(&sections, &mut generator, "New Section").unwrap();
        assert_eq!(ids(&next), ["a-0", "a-1"]);
        assert_eq!(next[1].label, "New Section");
        assert!(!next[1].highlighted);
        assert!(has_unique_ids(&next));
    }

    #[test]
    fn delete_removes_only_target() {
        let next = delete_section(&abc(), "a").unwrap();
        assert_eq!(ids(&next), ["b", "c"]);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let sections = vec![Section::new("a", "A"), Section::new("a", "A again")];
        assert!(!has_unique_ids(&sections));
    }
}
