//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep editor and CLI layers decoupled from storage details.

pub mod sitemap_service;
