//! Pagination engine
//!
//! Runs one request: parse, scope, bound, select, assemble.

use super::assemble::assemble;
use super::strategies::PolicyKind;
use super::types::{PagedResult, PagingPolicy, RawPaginationArgs};
use super::window::resolve_window;
use crate::error::Result;
use crate::store::Collection;
use std::borrow::Cow;
use tracing::debug;

/// Pages over a collection with one policy
pub struct Paginator {
    policy: Box<dyn PagingPolicy>,
}

impl Paginator {
    /// Create a paginator for a policy
    pub fn new(policy: Box<dyn PagingPolicy>) -> Self {
        Self { policy }
    }

    /// Create a paginator for a policy kind
    pub fn for_kind(kind: PolicyKind) -> Self {
        Self::new(kind.policy())
    }

    /// Policy name
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Run one pagination request
    ///
    /// Pure function of the arguments and the collection contents. Either
    /// the whole page is returned or the first argument error.
    pub fn paginate(
        &self,
        collection: &Collection,
        raw: &RawPaginationArgs,
    ) -> Result<PagedResult> {
        let args = self.policy.parse(raw)?;

        let collection = match args.relay_id.as_deref() {
            Some(relay_id) => Cow::Owned(collection.scoped(relay_id)),
            None => Cow::Borrowed(collection),
        };

        let window = resolve_window(&collection, &args);
        let selection = self.policy.select(&window, &args);
        let result = assemble(collection.slice(selection.range.clone()), &selection);

        debug!(
            policy = self.policy.name(),
            first = ?raw.first,
            last = ?raw.last,
            after = ?raw.after,
            before = ?raw.before,
            start_index = window.start_index,
            end_index = window.end_index,
            has_next_page = selection.has_next_page,
            has_previous_page = selection.has_previous_page,
            edges = result.edges.len(),
            "Resolved page"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("policy", &self.policy.name())
            .finish()
    }
}
