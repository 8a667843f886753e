//! Sitemap domain model.
//!
//! # Responsibility
//! - Define the page/section/edge records shared by canvas, editors and storage.
//! - Keep one plain-data shape that render surfaces can consume directly.
//!
//! # Invariants
//! - Section ids are unique within one page's section list.
//! - Section order is meaningful and preserved exactly as stored.

pub mod edge;
pub mod page;
pub mod section;
pub mod snapshot;
