//! Repository for the `anime` table.

use anistream_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::anime::Anime;

/// Column list for the `anime` table.
const COLUMNS: &str =
    "id, title, slug, description, poster_url, release_year, created_at, updated_at";

pub struct AnimeRepo;

impl AnimeRepo {
    /// Find an anime by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Anime>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM anime WHERE id = $1");
        let rows = sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        StoreError::expect_unique("anime", id, rows)
    }
}
