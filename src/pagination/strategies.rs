//! Page-info policy implementations
//!
//! Each policy cuts the page out of the bounded window and derives
//! `hasNextPage`/`hasPreviousPage` its own way.

use super::types::{CountArg, PaginationArgs, PagingPolicy, RawPaginationArgs, Selection, Window};
use super::validate::{parse_lenient, parse_strict};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Range;

// ============================================================================
// Strict Policy
// ============================================================================

/// Lookahead-based policy
///
/// Fetches one item past the requested count toward the paging direction
/// and sets that direction's flag if it exists. The flag for the opposite
/// direction only reports whether the opposite bound was supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictPolicy;

impl PagingPolicy for StrictPolicy {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn parse(&self, raw: &RawPaginationArgs) -> Result<PaginationArgs> {
        parse_strict(raw)
    }

    fn select(&self, window: &Window, args: &PaginationArgs) -> Selection {
        let range = window.range();
        let available = range.len();

        if let Some(count) = args.first.value() {
            let count = as_count(count);
            let taken = available.min(count.saturating_add(1));
            let kept = taken.min(count);
            return Selection {
                range: range.start..range.start + kept,
                has_next_page: taken > count,
                has_previous_page: args.after.is_some(),
            };
        }

        if let Some(count) = args.last.value() {
            let count = as_count(count);
            let taken = available.min(count.saturating_add(1));
            let kept = taken.min(count);
            return Selection {
                range: range.end - kept..range.end,
                has_next_page: args.before.is_some(),
                has_previous_page: taken > count,
            };
        }

        Selection {
            range,
            has_next_page: window.end_index < window.total,
            has_previous_page: window.start_index > 0,
        }
    }
}

/// Validated counts are positive
fn as_count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

// ============================================================================
// Best-Effort Policy
// ============================================================================

/// Presence-based policy
///
/// Slices exactly the requested count without lookahead and infers the
/// flags from which arguments were supplied. Accepts `first` and `last`
/// together and never checks counts for positivity.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestEffortPolicy;

impl PagingPolicy for BestEffortPolicy {
    fn name(&self) -> &'static str {
        "best-effort"
    }

    fn parse(&self, raw: &RawPaginationArgs) -> Result<PaginationArgs> {
        parse_lenient(raw)
    }

    fn select(&self, window: &Window, args: &PaginationArgs) -> Selection {
        let mut range = window.range();
        if let CountArg::Value(count) = args.first {
            range = take_front(range, count);
        }
        if let CountArg::Value(count) = args.last {
            range = take_back(range, count);
        }

        let (has_next_page, has_previous_page) =
            match (args.first.is_present(), args.last.is_present()) {
                (true, false) => (window.end_index < window.total, args.after.is_some()),
                (false, true) => {
                    let total = i64::try_from(window.total).unwrap_or(i64::MAX);
                    (args.before.is_some(), total > args.last.value().unwrap_or(0))
                }
                _ => (window.end_index < window.total, window.start_index > 0),
            };

        Selection {
            range,
            has_next_page,
            has_previous_page,
        }
    }
}

/// Keep `count` items from the front; a negative count drops from the back
fn take_front(range: Range<usize>, count: i64) -> Range<usize> {
    let n = clamp_len(count.unsigned_abs(), range.len());
    if count >= 0 {
        range.start..range.start + n
    } else {
        range.start..range.end - n
    }
}

/// Keep `count` items from the back; zero keeps everything and a negative
/// count drops from the front
fn take_back(range: Range<usize>, count: i64) -> Range<usize> {
    let n = clamp_len(count.unsigned_abs(), range.len());
    match count.cmp(&0) {
        Ordering::Greater => range.end - n..range.end,
        Ordering::Equal => range,
        Ordering::Less => range.start + n..range.end,
    }
}

fn clamp_len(n: u64, len: usize) -> usize {
    usize::try_from(n).map_or(len, |n| n.min(len))
}

// ============================================================================
// Policy Selection
// ============================================================================

/// Which policy an endpoint or command uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Lookahead-based flags, full validation
    #[default]
    Strict,
    /// Presence-based flags, cursor validation only
    BestEffort,
}

impl PolicyKind {
    /// Instantiate the policy
    pub fn policy(self) -> Box<dyn PagingPolicy> {
        match self {
            PolicyKind::Strict => Box::new(StrictPolicy),
            PolicyKind::BestEffort => Box::new(BestEffortPolicy),
        }
    }
}
