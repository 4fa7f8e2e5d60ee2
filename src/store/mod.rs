//! Record store module
//!
//! The ordered, read-only collection the pagination core pages over.
//!
//! # Overview
//!
//! The store module provides:
//! - `Collection` - ordered records with an id → index lookup
//! - Seeding from generated data or a JSON file

mod collection;
mod seed;

pub use collection::Collection;
pub use seed::{load_seed_file, seed_projects};
