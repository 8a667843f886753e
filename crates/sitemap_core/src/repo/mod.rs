//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the save/load contract for whole sitemaps.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs report transport and data errors; deciding how to
//!   surface them to the user is the service layer's job.

pub mod sitemap_repo;
