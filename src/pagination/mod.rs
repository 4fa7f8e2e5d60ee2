//! Pagination module
//!
//! Relay-style cursor pagination: `first`/`after` forward, `last`/`before`
//! backward, edges plus page info out.
//!
//! # Overview
//!
//! A request flows through four stages:
//! - argument parsing (strict or lenient, per policy)
//! - bound resolution of `after`/`before` into an index window
//! - selection of the page out of the window, deriving the page flags
//! - assembly of edges and page info
//!
//! Two policies coexist. [`StrictPolicy`] validates everything and uses a
//! one-item lookahead for the flag in the paging direction.
//! [`BestEffortPolicy`] validates only cursors and infers flags from which
//! arguments were supplied.

mod assemble;
mod paginator;
mod strategies;
mod types;
mod validate;
mod window;

pub use assemble::assemble;
pub use paginator::Paginator;
pub use strategies::{BestEffortPolicy, PolicyKind, StrictPolicy};
pub use types::{
    CountArg, Edge, ErrorResponse, PageInfo, PageResponse, PagedResult, PaginationArgs,
    PagingPolicy, RawPaginationArgs, Selection, Window,
};
pub use validate::{parse_lenient, parse_strict};
pub use window::resolve_window;

#[cfg(test)]
mod tests;
