//! Client module
//!
//! Walks a paginated endpoint page by page, following `pageInfo`.
//!
//! # Overview
//!
//! The client module provides:
//! - `PageSource` - one request, answered in-process or over HTTP
//! - `PageWalker` - follows start/end cursors until the flags run out

mod source;
mod walker;

pub use source::{endpoint_path, HttpSource, HttpSourceConfig, LocalSource, PageSource};
pub use walker::{Direction, PageWalker, WalkResult};
