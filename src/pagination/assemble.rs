//! Page assembly
//!
//! Maps the selected records to edges and fills in the page info.

use super::types::{Edge, PageInfo, PagedResult, Selection};
use crate::cursor::Cursor;
use crate::types::Project;

/// Build the connection for a selected page
pub fn assemble(records: &[Project], selection: &Selection) -> PagedResult {
    let edges: Vec<Edge> = records
        .iter()
        .map(|project| Edge {
            cursor: Cursor::encode(project.id),
            node: project.clone(),
        })
        .collect();

    let page_info = PageInfo {
        has_next_page: selection.has_next_page,
        has_previous_page: selection.has_previous_page,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    PagedResult { edges, page_info }
}
