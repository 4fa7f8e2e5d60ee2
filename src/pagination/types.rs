//! Pagination types and traits
//!
//! Defines the request, window, and connection types shared by both
//! page-info policies.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::types::{Project, RecordId};
use serde::{Deserialize, Serialize};
use std::ops::Range;

// ============================================================================
// Request
// ============================================================================

/// Pagination arguments as they arrive at the boundary
///
/// Every field is optional text; each policy decides how strictly to
/// interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaginationArgs {
    /// Page size from the start of the bounded window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Page size from the end of the bounded window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// Exclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Equality filter on the project's relay id (best-effort only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_relay_id: Option<String>,
}

impl RawPaginationArgs {
    /// Create empty arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `first`
    pub fn first(mut self, count: impl ToString) -> Self {
        self.first = Some(count.to_string());
        self
    }

    /// Set `last`
    pub fn last(mut self, count: impl ToString) -> Self {
        self.last = Some(count.to_string());
        self
    }

    /// Set the `after` cursor
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the `before` cursor
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the relay id filter
    pub fn relay_id(mut self, relay_id: impl Into<String>) -> Self {
        self.conversation_relay_id = Some(relay_id.into());
        self
    }

    /// Query string pairs in wire naming
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("first", self.first.as_deref()),
            ("last", self.last.as_deref()),
            ("after", self.after.as_deref()),
            ("before", self.before.as_deref()),
            ("conversationRelayId", self.conversation_relay_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// A `first` or `last` count after parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountArg {
    /// Not supplied
    #[default]
    Absent,
    /// Supplied but not a number (only the best-effort policy keeps these)
    Unparsed,
    /// Supplied and numeric
    Value(i64),
}

impl CountArg {
    /// Check if the caller supplied this count at all
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Numeric value, if any
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

/// Parsed pagination arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationArgs {
    /// Decoded `after` id
    pub after: Option<RecordId>,
    /// Decoded `before` id
    pub before: Option<RecordId>,
    /// Forward count
    pub first: CountArg,
    /// Backward count
    pub last: CountArg,
    /// Relay scope, if the policy honours it
    pub relay_id: Option<String>,
}

// ============================================================================
// Window
// ============================================================================

/// Index bounds resolved from `after`/`before`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First eligible index
    pub start_index: usize,
    /// One past the last eligible index
    pub end_index: usize,
    /// Size of the collection the bounds were resolved against
    pub total: usize,
}

impl Window {
    /// Eligible index range, empty when the bounds cross
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// The part of a window a policy selected, plus the flags it derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Index range of the page
    pub range: Range<usize>,
    /// More items exist toward the end
    pub has_next_page: bool,
    /// More items exist toward the start
    pub has_previous_page: bool,
}

/// Flag-derivation strategy
///
/// Both policies share bound resolution and page assembly. They differ
/// in how arguments are parsed and how the page is cut from the window.
pub trait PagingPolicy: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Parse boundary arguments, reporting the first violation
    fn parse(&self, raw: &RawPaginationArgs) -> Result<PaginationArgs>;

    /// Cut the page out of the bounded window and derive the flags
    fn select(&self, window: &Window, args: &PaginationArgs) -> Selection;
}

// ============================================================================
// Connection
// ============================================================================

/// A record paired with its cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Cursor addressing `node`
    pub cursor: Cursor,
    /// The record
    pub node: Project,
}

/// Continuation metadata for a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there are more items after this page
    pub has_next_page: bool,
    /// Whether there are items before this page
    pub has_previous_page: bool,
    /// Cursor of the first edge, null when empty
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last edge, null when empty
    pub end_cursor: Option<Cursor>,
}

/// A page of edges with its page info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    /// Edges in ascending id order
    pub edges: Vec<Edge>,
    /// Continuation metadata
    pub page_info: PageInfo,
}

impl PagedResult {
    /// Ids of the nodes on this page
    pub fn ids(&self) -> Vec<RecordId> {
        self.edges.iter().map(|e| e.node.id).collect()
    }
}

/// Success envelope returned by the HTTP endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// The page
    pub data: PagedResult,
}

/// Error envelope returned by the HTTP endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure
    pub error: String,
}
