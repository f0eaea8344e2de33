use anistream_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `episodes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub season_id: DbId,
    /// Ordering key within the parent season.
    pub episode_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
