//! Repository for the `episodes` table.

use anistream_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::episode::Episode;

/// Column list for the `episodes` table.
const COLUMNS: &str = "id, season_id, episode_number, title, description, video_url, \
    thumbnail_url, duration_secs, created_at, updated_at";

/// Column list for the `episodes` table (used in JOIN queries).
const JOINED_COLUMNS: &str = "e.id, e.season_id, e.episode_number, e.title, e.description, \
    e.video_url, e.thumbnail_url, e.duration_secs, e.created_at, e.updated_at";

pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Find an episode by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        let rows = sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        StoreError::expect_unique("episodes", id, rows)
    }

    /// List the episodes of one season, ordered by episode number.
    pub async fn list_for_season(
        pool: &PgPool,
        season_id: DbId,
    ) -> Result<Vec<Episode>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes \
             WHERE season_id = $1 \
             ORDER BY episode_number ASC, id ASC"
        );
        let episodes = sqlx::query_as::<_, Episode>(&query)
            .bind(season_id)
            .fetch_all(pool)
            .await?;
        Ok(episodes)
    }

    /// List every episode of every season of an anime in a single query.
    pub async fn list_for_anime(pool: &PgPool, anime_id: DbId) -> Result<Vec<Episode>, StoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM episodes e \
             JOIN seasons s ON s.id = e.season_id \
             WHERE s.anime_id = $1 \
             ORDER BY e.season_id ASC, e.episode_number ASC, e.id ASC"
        );
        let episodes = sqlx::query_as::<_, Episode>(&query)
            .bind(anime_id)
            .fetch_all(pool)
            .await?;
        Ok(episodes)
    }
}
