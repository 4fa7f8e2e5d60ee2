//! Common types used throughout relay-pager
//!
//! This module contains the record type served by the pagination
//! endpoints and the type aliases shared across modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Unique, totally ordered record identifier
pub type RecordId = i64;

// ============================================================================
// Records
// ============================================================================

/// A project record
///
/// The `id` defines the canonical collection order. Everything else is
/// payload the pagination core never inspects, apart from the optional
/// relay id used for scoping on the best-effort endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, strictly increasing by insertion
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Conversation relay the project belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_relay_id: Option<String>,
}

impl Project {
    /// Create a project without a relay id
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            conversation_relay_id: None,
        }
    }

    /// Attach a conversation relay id
    pub fn with_relay_id(mut self, relay_id: impl Into<String>) -> Self {
        self.conversation_relay_id = Some(relay_id.into());
        self
    }
}
