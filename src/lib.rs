// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # relay-pager
//!
//! Relay-style cursor pagination over an ordered record collection.
//! Clients page forward with `first`/`after`, backward with
//! `last`/`before`, and get edges plus page info back.
//!
//! ## Features
//!
//! - **Opaque Cursors**: base64-tagged record ids, strictly validated
//! - **Two Policies**: strict lookahead flags and best-effort presence flags
//! - **HTTP Server**: axum endpoints for both policies
//! - **Page Walker**: follows page info in-process or over HTTP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_pager::pagination::{Paginator, PolicyKind, RawPaginationArgs};
//! use relay_pager::store::{seed_projects, Collection};
//!
//! let collection = Collection::new(seed_projects(50, "Project", &[]))?;
//! let page = Paginator::for_kind(PolicyKind::Strict)
//!     .paginate(&collection, &RawPaginationArgs::new().first(5))?;
//!
//! assert!(page.page_info.has_next_page);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │        HTTP (/api/projects, /api/projects-error) / CLI       │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬──────────────┬────┴─────────┬──────────────┬──────────┐
//! │  Parse   │    Window    │    Select    │   Assemble   │  Cursor  │
//! ├──────────┼──────────────┼──────────────┼──────────────┼──────────┤
//! │ strict   │ after/before │ StrictPolicy │ edges        │ encode   │
//! │ lenient  │ → indices    │ BestEffort   │ page info    │ decode   │
//! └──────────┴──────────────┴──────────────┴──────────────┴──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error variants before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cursor encoding and decoding
pub mod cursor;

/// Ordered record collection and seeding
pub mod store;

/// Pagination engine and policies
pub mod pagination;

/// Page walking over local or remote sources
pub mod client;

/// YAML configuration
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use cursor::Cursor;
pub use pagination::{PagedResult, Paginator, PolicyKind, RawPaginationArgs};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
