//! Argument parsing
//!
//! The strict parser rejects anything that is not a well-formed request.
//! The lenient parser only rejects undecodable cursors and keeps
//! unusable counts as [`CountArg::Unparsed`].
//!
//! Violations are reported in a fixed order: direction conflict, `after`,
//! `before`, `first`, `last`.
//!
//! Counts must be a whole (trimmed) integer. Unlike JavaScript's prefix
//! `parseInt`, `"5abc"` is not read as `5`: the strict parser rejects it
//! and the lenient parser treats it as unparsed, so it applies no slice.

use super::types::{CountArg, PaginationArgs, RawPaginationArgs};
use crate::cursor;
use crate::error::{Error, Result};
use crate::types::RecordId;

/// Parse arguments for the strict policy
pub fn parse_strict(raw: &RawPaginationArgs) -> Result<PaginationArgs> {
    if raw.first.is_some() && raw.last.is_some() {
        return Err(Error::BothDirectionsSpecified);
    }

    let (after, before) = decode_bounds(raw)?;

    let first = match raw.first.as_deref() {
        Some(text) => CountArg::Value(parse_positive(text).ok_or(Error::InvalidFirst)?),
        None => CountArg::Absent,
    };
    let last = match raw.last.as_deref() {
        Some(text) => CountArg::Value(parse_positive(text).ok_or(Error::InvalidLast)?),
        None => CountArg::Absent,
    };

    Ok(PaginationArgs {
        after,
        before,
        first,
        last,
        relay_id: None,
    })
}

/// Parse arguments for the best-effort policy
pub fn parse_lenient(raw: &RawPaginationArgs) -> Result<PaginationArgs> {
    let (after, before) = decode_bounds(raw)?;

    Ok(PaginationArgs {
        after,
        before,
        first: lenient_count(raw.first.as_deref()),
        last: lenient_count(raw.last.as_deref()),
        relay_id: non_empty(raw.conversation_relay_id.as_deref()).map(String::from),
    })
}

/// Decode the `after` and `before` cursors, `after` first
///
/// Empty strings count as absent.
fn decode_bounds(raw: &RawPaginationArgs) -> Result<(Option<RecordId>, Option<RecordId>)> {
    let after = non_empty(raw.after.as_deref())
        .map(|token| cursor::decode(token).map_err(|_| Error::InvalidAfterCursor))
        .transpose()?;
    let before = non_empty(raw.before.as_deref())
        .map(|token| cursor::decode(token).map_err(|_| Error::InvalidBeforeCursor))
        .transpose()?;
    Ok((after, before))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_count(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

fn parse_positive(text: &str) -> Option<i64> {
    parse_count(text).filter(|n| *n > 0)
}

fn lenient_count(text: Option<&str>) -> CountArg {
    match text {
        None => CountArg::Absent,
        Some(text) => parse_count(text).map_or(CountArg::Unparsed, CountArg::Value),
    }
}
