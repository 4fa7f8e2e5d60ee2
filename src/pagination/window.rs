//! Bound resolution
//!
//! Turns decoded `after`/`before` ids into an index window. A cursor that
//! decodes but names no record in the collection applies no bound.

use super::types::{PaginationArgs, Window};
use crate::store::Collection;

/// Resolve the eligible index window for a request
pub fn resolve_window(collection: &Collection, args: &PaginationArgs) -> Window {
    let total = collection.len();

    let start_index = args
        .after
        .and_then(|id| collection.position(id))
        .map_or(0, |i| i + 1);
    let end_index = args
        .before
        .and_then(|id| collection.position(id))
        .unwrap_or(total);

    Window {
        start_index,
        end_index,
        total,
    }
}
