//! Season entity model and the derived seasons-with-episodes view.

use anistream_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::episode::Episode;

/// A row from the `seasons` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Season {
    pub id: DbId,
    pub anime_id: DbId,
    /// Ordering key within the parent anime.
    pub season_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A season enriched with its ordered episodes. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonWithEpisodes {
    #[serde(flatten)]
    pub season: Season,
    pub episodes: Vec<Episode>,
    /// Always equal to `episodes.len()`.
    pub episode_count: usize,
}

impl SeasonWithEpisodes {
    pub fn new(season: Season, episodes: Vec<Episode>) -> Self {
        let episode_count = episodes.len();
        Self {
            season,
            episodes,
            episode_count,
        }
    }
}
