//! Repository for the `seasons` table.

use anistream_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::season::Season;

/// Column list for the `seasons` table.
const COLUMNS: &str = "id, anime_id, season_number, title, description, release_date, \
    created_at, updated_at";

pub struct SeasonRepo;

impl SeasonRepo {
    /// Find a season by its internal ID.
    ///
    /// Fetches every matching row so a duplicated key surfaces as
    /// [`StoreError::Integrity`] instead of silently picking one.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Season>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM seasons WHERE id = $1");
        let rows = sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        StoreError::expect_unique("seasons", id, rows)
    }

    /// List all seasons of an anime, ordered by season number.
    pub async fn list_for_anime(pool: &PgPool, anime_id: DbId) -> Result<Vec<Season>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM seasons \
             WHERE anime_id = $1 \
             ORDER BY season_number ASC, id ASC"
        );
        let seasons = sqlx::query_as::<_, Season>(&query)
            .bind(anime_id)
            .fetch_all(pool)
            .await?;
        Ok(seasons)
    }
}
