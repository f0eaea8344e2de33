//! Anime entity model: the top-level catalog title.

use anistream_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `anime` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Anime {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
