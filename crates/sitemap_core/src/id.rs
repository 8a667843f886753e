//! Injected id generation.
//!
//! # Responsibility
//! - Produce fresh ids for pages and sections without ambient global counters.
//!
//! # Invariants
//! - `CounterIds` is deterministic: `prefix-0`, `prefix-1`, ...
//! - `fresh_id` never returns an id rejected by the caller's `is_taken` check.

use crate::error::{SitemapError, SitemapResult};
use uuid::Uuid;

const MAX_ID_ATTEMPTS: usize = 16;

/// Prefix of canvas-generated page ids (`node-N`).
pub(crate) const NODE_ID_PREFIX: &str = "node";

/// Source of fresh string ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Monotonic `prefix-N` ids.
#[derive(Debug, Clone)]
pub struct CounterIds {
    prefix: String,
    next: u64,
}

impl CounterIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 0)
    }

    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }

    /// Continues after the highest `prefix-N` found in `existing`.
    ///
    /// Ids that do not follow the `prefix-N` shape are ignored.
    pub fn resume<'a>(prefix: impl Into<String>, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let prefix = prefix.into();
        let next = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix.as_str())?.strip_prefix('-')?.parse::<u64>().ok())
            .max()
            .map_or(0, |highest| highest + 1);
        Self { prefix, next }
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random v4 uuid ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Draws ids from `ids` until one is not taken.
///
/// # Errors
/// - Returns `IdExhausted` when every attempt collides.
pub fn fresh_id(
    ids: &mut dyn IdGenerator,
    is_taken: impl Fn(&str) -> bool,
) -> SitemapResult<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = ids.next_id();
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    Err(SitemapError::IdExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}
