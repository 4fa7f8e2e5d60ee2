//! Page walker
//!
//! Follows page-info continuation the way an infinite list does: take a
//! page, then keep requesting the neighbouring page from its edge cursor
//! while the matching flag says one exists.

use super::source::PageSource;
use crate::error::Result;
use crate::pagination::{PagedResult, RawPaginationArgs};
use crate::types::RecordId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which way to walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Newest page first (`last`), then older pages via `before`
    #[default]
    Backward,
    /// Oldest page first (`first`), then newer pages via `after`
    Forward,
}

/// Pages collected by one walk, in fetch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    /// Direction walked
    pub direction: Direction,
    /// Pages in the order they were fetched
    pub pages: Vec<PagedResult>,
    /// Stopped at the page limit with more pages announced
    pub truncated: bool,
}

impl WalkResult {
    /// All visited ids in collection order
    pub fn ids(&self) -> Vec<RecordId> {
        let mut pages: Vec<&PagedResult> = self.pages.iter().collect();
        if self.direction == Direction::Backward {
            pages.reverse();
        }
        pages.into_iter().flat_map(PagedResult::ids).collect()
    }

    /// Total number of edges visited
    pub fn edge_count(&self) -> usize {
        self.pages.iter().map(|p| p.edges.len()).sum()
    }
}

/// Walks every page a source offers in one direction
pub struct PageWalker<S> {
    source: S,
    page_size: u32,
    max_pages: usize,
    relay_id: Option<String>,
}

impl<S: PageSource> PageWalker<S> {
    /// Create a walker
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            max_pages: 1000,
            relay_id: None,
        }
    }

    /// Set the page limit
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Scope every request to a relay id
    pub fn relay_id(mut self, relay_id: impl Into<String>) -> Self {
        self.relay_id = Some(relay_id.into());
        self
    }

    /// Walk in one direction until the source reports no further page
    pub async fn walk(&self, direction: Direction) -> Result<WalkResult> {
        let mut result = WalkResult {
            direction,
            ..WalkResult::default()
        };
        let mut args = self.request(direction, None);

        loop {
            let page = self.source.fetch(&args).await?;
            let next = continuation(direction, &page);
            debug!(
                page = result.pages.len(),
                edges = page.edges.len(),
                more = next.is_some(),
                "Fetched page"
            );
            result.pages.push(page);

            let Some(cursor) = next else {
                break;
            };
            if result.pages.len() >= self.max_pages {
                warn!("Stopping walk after {} pages", self.max_pages);
                result.truncated = true;
                break;
            }
            args = self.request(direction, Some(cursor));
        }

        Ok(result)
    }

    fn request(&self, direction: Direction, cursor: Option<String>) -> RawPaginationArgs {
        let mut args = match direction {
            Direction::Backward => RawPaginationArgs::new().last(self.page_size),
            Direction::Forward => RawPaginationArgs::new().first(self.page_size),
        };
        if let Some(cursor) = cursor {
            args = match direction {
                Direction::Backward => args.before(cursor),
                Direction::Forward => args.after(cursor),
            };
        }
        if let Some(relay_id) = &self.relay_id {
            args = args.relay_id(relay_id.clone());
        }
        args
    }
}

/// Cursor to continue from, if the page announces a neighbour
fn continuation(direction: Direction, page: &PagedResult) -> Option<String> {
    let info = &page.page_info;
    let cursor = match direction {
        Direction::Backward if info.has_previous_page => info.start_cursor.clone(),
        Direction::Forward if info.has_next_page => info.end_cursor.clone(),
        _ => None,
    };
    cursor.map(String::from)
}
