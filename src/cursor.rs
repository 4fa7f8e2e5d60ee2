//! Cursor codec
//!
//! Cursors are opaque tokens that round-trip to exactly one record id.
//! The wire format is standard padded base64 of `cursor:{id}`.

use crate::error::{Error, Result};
use crate::types::RecordId;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag every cursor payload starts with
const CURSOR_PREFIX: &str = "cursor";

/// Opaque pagination cursor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Encode a record id into a cursor
    pub fn encode(id: RecordId) -> Self {
        Self(STANDARD.encode(format!("{CURSOR_PREFIX}:{id}")))
    }

    /// Decode this cursor back into a record id
    pub fn decode(&self) -> Result<RecordId> {
        decode(&self.0)
    }

    /// Borrow the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the token text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}

/// Encode a record id into its cursor
pub fn encode(id: RecordId) -> Cursor {
    Cursor::encode(id)
}

/// Decode a cursor token into the record id it addresses
///
/// Fails with [`Error::InvalidCursor`] when the token is not base64, the
/// payload lacks the `cursor:` tag, or the remainder is not a decimal id.
pub fn decode(token: &str) -> Result<RecordId> {
    let bytes = STANDARD.decode(token).map_err(|_| Error::InvalidCursor)?;
    let payload = String::from_utf8(bytes).map_err(|_| Error::InvalidCursor)?;

    let (prefix, id) = payload.split_once(':').ok_or(Error::InvalidCursor)?;
    if prefix != CURSOR_PREFIX {
        return Err(Error::InvalidCursor);
    }

    id.parse::<RecordId>().map_err(|_| Error::InvalidCursor)
}
