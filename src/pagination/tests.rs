//! Tests for pagination module

use super::*;
use crate::cursor::{encode, Cursor};
use crate::error::Error;
use crate::store::{seed_projects, Collection};
use crate::types::Project;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn projects(count: usize) -> Collection {
    Collection::new(seed_projects(count, "Project", &[])).unwrap()
}

fn strict(raw: RawPaginationArgs) -> crate::Result<PagedResult> {
    Paginator::for_kind(PolicyKind::Strict).paginate(&projects(50), &raw)
}

fn best_effort(raw: RawPaginationArgs) -> crate::Result<PagedResult> {
    Paginator::for_kind(PolicyKind::BestEffort).paginate(&projects(50), &raw)
}

fn cursor(id: i64) -> String {
    encode(id).into_string()
}

fn assert_cursor_invariants(result: &PagedResult) {
    let info = &result.page_info;
    if result.edges.is_empty() {
        assert!(info.start_cursor.is_none());
        assert!(info.end_cursor.is_none());
    } else {
        assert_eq!(info.start_cursor.as_ref(), Some(&result.edges[0].cursor));
        assert_eq!(
            info.end_cursor.as_ref(),
            Some(&result.edges[result.edges.len() - 1].cursor)
        );
    }
    for edge in &result.edges {
        assert_eq!(edge.cursor, Cursor::encode(edge.node.id));
    }
    let ids = result.ids();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "edges out of order: {ids:?}");
}

// ============================================================================
// Strict Policy Scenarios
// ============================================================================

#[test]
fn test_strict_first_page() {
    let result = strict(RawPaginationArgs::new().first(5)).unwrap();
    assert_eq!(result.ids(), vec![1, 2, 3, 4, 5]);
    assert!(result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);
    assert_eq!(result.page_info.start_cursor, Some(encode(1)));
    assert_eq!(result.page_info.end_cursor, Some(encode(5)));
    assert_cursor_invariants(&result);
}

#[test]
fn test_strict_last_page() {
    let result = strict(RawPaginationArgs::new().last(5)).unwrap();
    assert_eq!(result.ids(), vec![46, 47, 48, 49, 50]);
    assert!(!result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
    assert_eq!(result.page_info.start_cursor, Some(encode(46)));
    assert_eq!(result.page_info.end_cursor, Some(encode(50)));
    assert_cursor_invariants(&result);
}

#[test]
fn test_strict_before_with_fewer_than_requested() {
    let result = strict(RawPaginationArgs::new().before(cursor(5)).last(5)).unwrap();
    assert_eq!(result.ids(), vec![1, 2, 3, 4]);
    assert!(result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);
    assert_eq!(result.page_info.start_cursor, Some(encode(1)));
    assert_eq!(result.page_info.end_cursor, Some(encode(4)));
}

#[test]
fn test_strict_after_forward() {
    let result = strict(RawPaginationArgs::new().after(cursor(5)).first(5)).unwrap();
    assert_eq!(result.ids(), vec![6, 7, 8, 9, 10]);
    assert!(result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
    assert_eq!(result.page_info.start_cursor, Some(encode(6)));
    assert_eq!(result.page_info.end_cursor, Some(encode(10)));
}

#[test]
fn test_strict_before_first_record_is_empty() {
    let result = strict(RawPaginationArgs::new().before(cursor(1)).last(5)).unwrap();
    assert!(result.edges.is_empty());
    assert!(result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);
    assert!(result.page_info.start_cursor.is_none());
    assert!(result.page_info.end_cursor.is_none());
}

#[test]
fn test_strict_forward_to_end_has_no_next() {
    let result = strict(RawPaginationArgs::new().after(cursor(45)).first(5)).unwrap();
    assert_eq!(result.ids(), vec![46, 47, 48, 49, 50]);
    assert!(!result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
}

#[test]
fn test_strict_exact_fit_has_no_lookahead_item() {
    let result = strict(RawPaginationArgs::new().first(50)).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(!result.page_info.has_next_page);

    let result = strict(RawPaginationArgs::new().last(49)).unwrap();
    assert_eq!(result.ids()[0], 2);
    assert!(result.page_info.has_previous_page);
}

#[test]
fn test_strict_trailing_flag_is_presence_only() {
    // `before` names no record, so nothing follows the page, yet the
    // trailing flag only reflects that `before` was sent
    let result = strict(RawPaginationArgs::new().before(cursor(999)).last(5)).unwrap();
    assert_eq!(result.ids(), vec![46, 47, 48, 49, 50]);
    assert!(result.page_info.has_next_page);

    // `after` was supplied, so there is a previous page even though the
    // cursor names no record and no bound was applied
    let result = strict(RawPaginationArgs::new().after(cursor(999)).first(3)).unwrap();
    assert_eq!(result.ids(), vec![1, 2, 3]);
    assert!(result.page_info.has_previous_page);
}

#[test]
fn test_strict_no_counts_returns_bounded_window() {
    let result = strict(RawPaginationArgs::new()).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(!result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);

    let result = strict(
        RawPaginationArgs::new()
            .after(cursor(10))
            .before(cursor(15)),
    )
    .unwrap();
    assert_eq!(result.ids(), vec![11, 12, 13, 14]);
    assert!(result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
}

#[test]
fn test_strict_crossed_bounds_are_empty() {
    let result = strict(
        RawPaginationArgs::new()
            .after(cursor(20))
            .before(cursor(10))
            .first(5),
    )
    .unwrap();
    assert!(result.edges.is_empty());
    assert!(!result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
    assert_cursor_invariants(&result);
}

#[test]
fn test_strict_unknown_cursor_applies_no_bound() {
    let result = strict(RawPaginationArgs::new().before(cursor(0)).last(2)).unwrap();
    assert_eq!(result.ids(), vec![49, 50]);
    assert!(result.page_info.has_next_page);
}

#[test]
fn test_strict_empty_bound_strings_are_absent() {
    let result = strict(RawPaginationArgs::new().after("").first(2)).unwrap();
    assert_eq!(result.ids(), vec![1, 2]);
    assert!(!result.page_info.has_previous_page);
}

#[test]
fn test_strict_huge_count() {
    let result = strict(RawPaginationArgs::new().first(i64::MAX)).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(!result.page_info.has_next_page);
}

// ============================================================================
// Strict Policy Errors
// ============================================================================

#[test]
fn test_strict_both_directions() {
    let err = strict(RawPaginationArgs::new().first(5).last(5)).unwrap_err();
    assert!(matches!(err, Error::BothDirectionsSpecified));
    assert_eq!(err.to_string(), "Cannot specify both first and last");
}

#[test_case("-5" ; "negative")]
#[test_case("0" ; "zero")]
#[test_case("abc" ; "non numeric")]
#[test_case("" ; "empty")]
#[test_case("2.5" ; "fractional")]
#[test_case("5abc" ; "trailing garbage")]
fn test_strict_invalid_first(value: &str) {
    let err = strict(RawPaginationArgs::new().first(value)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid first parameter");
}

#[test_case("0" ; "zero")]
#[test_case("-1" ; "negative")]
#[test_case("many" ; "non numeric")]
fn test_strict_invalid_last(value: &str) {
    let err = strict(RawPaginationArgs::new().last(value)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid last parameter");
}

#[test]
fn test_strict_count_allows_surrounding_whitespace() {
    let result = strict(RawPaginationArgs::new().first(" 3 ")).unwrap();
    assert_eq!(result.ids(), vec![1, 2, 3]);
}

#[test]
fn test_strict_invalid_after_cursor() {
    let err = strict(RawPaginationArgs::new().after("not-a-cursor").first(5)).unwrap_err();
    assert!(matches!(err, Error::InvalidAfterCursor));
    assert_eq!(err.to_string(), "Invalid after cursor");
}

#[test]
fn test_strict_invalid_before_cursor() {
    let err = strict(RawPaginationArgs::new().before("not-a-cursor").last(5)).unwrap_err();
    assert!(matches!(err, Error::InvalidBeforeCursor));
    assert_eq!(err.to_string(), "Invalid before cursor");
}

#[test_case(RawPaginationArgs::new().first(5).last(0).after("bad"), "Cannot specify both first and last" ; "direction conflict beats everything")]
#[test_case(RawPaginationArgs::new().first(0).after("bad").before("bad"), "Invalid after cursor" ; "after beats before and count")]
#[test_case(RawPaginationArgs::new().first(0).before("bad"), "Invalid before cursor" ; "before beats count")]
#[test_case(RawPaginationArgs::new().last(-1).before("bad"), "Invalid before cursor" ; "before beats last")]
#[test_case(RawPaginationArgs::new().first(0).after(cursor(3)), "Invalid first parameter" ; "valid cursor then count")]
fn test_strict_error_precedence(raw: RawPaginationArgs, expected: &str) {
    let err = strict(raw).unwrap_err();
    assert_eq!(err.to_string(), expected);
}

// ============================================================================
// Best-Effort Policy Scenarios
// ============================================================================

#[test_case(RawPaginationArgs::new().first(5), &[1, 2, 3, 4, 5], false, false ; "first page")]
#[test_case(RawPaginationArgs::new().last(5), &[46, 47, 48, 49, 50], false, true ; "last page")]
#[test_case(RawPaginationArgs::new().before(cursor(5)).last(5), &[1, 2, 3, 4], true, true ; "before with fewer than requested")]
#[test_case(RawPaginationArgs::new().after(cursor(5)).first(5), &[6, 7, 8, 9, 10], false, true ; "after forward")]
#[test_case(RawPaginationArgs::new().before(cursor(1)).last(5), &[], true, true ; "before first record")]
fn test_best_effort_scenarios(
    raw: RawPaginationArgs,
    expected: &[i64],
    has_next_page: bool,
    has_previous_page: bool,
) {
    let result = best_effort(raw).unwrap();
    assert_eq!(result.ids(), expected.to_vec());
    assert_eq!(result.page_info.has_next_page, has_next_page);
    assert_eq!(result.page_info.has_previous_page, has_previous_page);
    assert_cursor_invariants(&result);
}

#[test]
fn test_policies_diverge_on_same_request() {
    let raw = RawPaginationArgs::new().after(cursor(5)).first(5);
    let strict_result = strict(raw.clone()).unwrap();
    let lenient_result = best_effort(raw).unwrap();

    assert_eq!(strict_result.edges, lenient_result.edges);
    assert!(strict_result.page_info.has_next_page);
    assert!(!lenient_result.page_info.has_next_page);
}

#[test]
fn test_best_effort_accepts_both_directions() {
    let result = best_effort(RawPaginationArgs::new().first(10).last(3)).unwrap();
    assert_eq!(result.ids(), vec![8, 9, 10]);
    assert!(!result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);
}

#[test]
fn test_best_effort_does_not_reject_counts() {
    let result = best_effort(RawPaginationArgs::new().first(-5)).unwrap();
    assert_eq!(result.edges.len(), 45);

    let result = best_effort(RawPaginationArgs::new().last(0)).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(result.page_info.has_previous_page);

    let result = best_effort(RawPaginationArgs::new().first(0)).unwrap();
    assert!(result.edges.is_empty());
}

#[test_case("5abc" ; "trailing garbage")]
#[test_case("2.5" ; "fractional")]
#[test_case("lots" ; "word")]
fn test_best_effort_count_must_be_whole_integer(value: &str) {
    let result = best_effort(RawPaginationArgs::new().first(value)).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(!result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);
}

#[test]
fn test_best_effort_ignores_non_numeric_counts() {
    let result = best_effort(RawPaginationArgs::new().first("lots")).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(!result.page_info.has_next_page);

    // last is still "used" for flag derivation, with a count of zero
    let result = best_effort(RawPaginationArgs::new().last("")).unwrap();
    assert_eq!(result.edges.len(), 50);
    assert!(result.page_info.has_previous_page);
}

#[test]
fn test_best_effort_still_rejects_bad_cursors() {
    let err = best_effort(RawPaginationArgs::new().after("not-a-cursor").first(5)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid after cursor");

    let err = best_effort(RawPaginationArgs::new().before("not-a-cursor")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid before cursor");
}

#[test]
fn test_best_effort_relay_scope() {
    let relays = vec!["alpha".to_string(), "beta".to_string()];
    let collection = Collection::new(seed_projects(10, "Project", &relays)).unwrap();
    let paginator = Paginator::for_kind(PolicyKind::BestEffort);

    let result = paginator
        .paginate(&collection, &RawPaginationArgs::new().relay_id("beta").first(2))
        .unwrap();
    assert_eq!(result.ids(), vec![2, 4]);
    assert!(!result.page_info.has_next_page);

    let result = paginator
        .paginate(
            &collection,
            &RawPaginationArgs::new().relay_id("beta").after(cursor(4)),
        )
        .unwrap();
    assert_eq!(result.ids(), vec![6, 8, 10]);
    assert!(result.page_info.has_previous_page);

    // A cursor from outside the scope applies no bound
    let result = paginator
        .paginate(
            &collection,
            &RawPaginationArgs::new().relay_id("beta").after(cursor(3)),
        )
        .unwrap();
    assert_eq!(result.ids(), vec![2, 4, 6, 8, 10]);

    let result = paginator
        .paginate(&collection, &RawPaginationArgs::new().relay_id("gamma"))
        .unwrap();
    assert!(result.edges.is_empty());
}

#[test]
fn test_strict_ignores_relay_scope() {
    let relays = vec!["alpha".to_string(), "beta".to_string()];
    let collection = Collection::new(seed_projects(4, "Project", &relays)).unwrap();
    let result = Paginator::for_kind(PolicyKind::Strict)
        .paginate(&collection, &RawPaginationArgs::new().relay_id("beta"))
        .unwrap();
    assert_eq!(result.ids(), vec![1, 2, 3, 4]);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_edge_count_never_exceeds_request() {
    for policy in [PolicyKind::Strict, PolicyKind::BestEffort] {
        let paginator = Paginator::for_kind(policy);
        let collection = projects(50);
        for count in 1..=12 {
            for anchor in [1, 7, 25, 49, 50] {
                let forward = RawPaginationArgs::new().after(cursor(anchor)).first(count);
                let result = paginator.paginate(&collection, &forward).unwrap();
                assert!(result.edges.len() <= count as usize);
                assert_cursor_invariants(&result);

                let backward = RawPaginationArgs::new().before(cursor(anchor)).last(count);
                let result = paginator.paginate(&collection, &backward).unwrap();
                assert!(result.edges.len() <= count as usize);
                assert_cursor_invariants(&result);
            }
        }
    }
}

#[test]
fn test_paginate_is_idempotent() {
    let collection = projects(50);
    let paginator = Paginator::for_kind(PolicyKind::Strict);
    let raw = RawPaginationArgs::new().after(cursor(12)).first(7);
    let first = paginator.paginate(&collection, &raw).unwrap();
    let second = paginator.paginate(&collection, &raw).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_collection() {
    let collection = Collection::new(Vec::new()).unwrap();
    for policy in [PolicyKind::Strict, PolicyKind::BestEffort] {
        let result = Paginator::for_kind(policy)
            .paginate(&collection, &RawPaginationArgs::new().first(5))
            .unwrap();
        assert!(result.edges.is_empty());
        assert!(!result.page_info.has_next_page);
        assert_cursor_invariants(&result);
    }
}

// ============================================================================
// Stage Tests
// ============================================================================

#[test]
fn test_parse_strict_values() {
    let args = parse_strict(&RawPaginationArgs::new().after(cursor(9)).first("4")).unwrap();
    assert_eq!(args.after, Some(9));
    assert_eq!(args.before, None);
    assert_eq!(args.first, CountArg::Value(4));
    assert_eq!(args.last, CountArg::Absent);
    assert_eq!(args.relay_id, None);
}

#[test]
fn test_parse_lenient_values() {
    let args = parse_lenient(
        &RawPaginationArgs::new()
            .first("x")
            .last("-2")
            .relay_id(""),
    )
    .unwrap();
    assert_eq!(args.first, CountArg::Unparsed);
    assert_eq!(args.last, CountArg::Value(-2));
    assert_eq!(args.relay_id, None);
}

#[test]
fn test_resolve_window_bounds() {
    let collection = projects(50);
    let args = PaginationArgs {
        after: Some(5),
        before: Some(20),
        ..PaginationArgs::default()
    };
    let window = resolve_window(&collection, &args);
    assert_eq!(
        window,
        Window {
            start_index: 5,
            end_index: 19,
            total: 50
        }
    );
    assert_eq!(window.range(), 5..19);

    let args = PaginationArgs {
        after: Some(30),
        before: Some(10),
        ..PaginationArgs::default()
    };
    let window = resolve_window(&collection, &args);
    assert!(window.range().is_empty());
}

#[test]
fn test_assemble_page_info() {
    let records = vec![Project::new(3, "c"), Project::new(4, "d")];
    let selection = Selection {
        range: 2..4,
        has_next_page: true,
        has_previous_page: false,
    };
    let result = assemble(&records, &selection);
    assert_eq!(result.page_info.start_cursor, Some(encode(3)));
    assert_eq!(result.page_info.end_cursor, Some(encode(4)));
    assert!(result.page_info.has_next_page);

    let empty = assemble(&[], &selection);
    assert_eq!(empty.page_info.start_cursor, None);
    assert_eq!(empty.page_info.end_cursor, None);
}

#[test]
fn test_paged_result_wire_shape() {
    let result = strict(RawPaginationArgs::new().first(1)).unwrap();
    let value = serde_json::to_value(PageResponse { data: result }).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "data": {
                "edges": [
                    {"cursor": "Y3Vyc29yOjE=", "node": {"id": 1, "name": "Project 1"}}
                ],
                "pageInfo": {
                    "hasNextPage": true,
                    "hasPreviousPage": false,
                    "startCursor": "Y3Vyc29yOjE=",
                    "endCursor": "Y3Vyc29yOjE="
                }
            }
        })
    );
}

#[test]
fn test_raw_args_query_pairs() {
    let raw = RawPaginationArgs::new().last(5).before("abc").relay_id("r1");
    assert_eq!(
        raw.query_pairs(),
        vec![("last", "5"), ("before", "abc"), ("conversationRelayId", "r1")]
    );
}
