//! Catalog entity kinds and identifier validation.
//!
//! Identifiers arrive as raw query-string values. Validation happens here,
//! before any store access.

use crate::error::CoreError;
use crate::types::DbId;

/// The kinds of catalog rows that can be fetched individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Anime,
    Season,
    Episode,
}

impl EntityKind {
    /// Human-readable label used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Anime => "Anime",
            Self::Season => "Season",
            Self::Episode => "Episode",
        }
    }

    pub fn id_required_message(self) -> String {
        format!("{} ID is required", self.label())
    }
}

/// Parse a raw identifier into a positive [`DbId`].
///
/// Missing, blank, non-numeric, zero and negative values are all rejected
/// with the same "ID is required" message.
pub fn parse_entity_id(kind: EntityKind, raw: Option<&str>) -> Result<DbId, CoreError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<DbId>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::Validation(kind.id_required_message()))
}

/// The error for a well-formed id with no matching row.
pub fn not_found(kind: EntityKind, id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: kind.label(),
        id,
    }
}
