//! The read interface the catalog layer needs from its row store.
//!
//! Handlers and the hierarchy assembler only see [`CatalogStore`], so they
//! can run against Postgres in production and an in-memory store in tests.

use anistream_core::types::DbId;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::anime::Anime;
use crate::models::episode::Episode;
use crate::models::season::Season;
use crate::repositories::{AnimeRepo, EpisodeRepo, SeasonRepo};
use crate::DbPool;

/// Read-only catalog queries. Every method issues exactly one query.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn find_anime(&self, id: DbId) -> Result<Option<Anime>, StoreError>;

    async fn find_season(&self, id: DbId) -> Result<Option<Season>, StoreError>;

    async fn find_episode(&self, id: DbId) -> Result<Option<Episode>, StoreError>;

    /// Seasons of an anime, ascending by `season_number`.
    async fn list_seasons_for_anime(&self, anime_id: DbId) -> Result<Vec<Season>, StoreError>;

    /// Episodes of a season, ascending by `episode_number`.
    async fn list_episodes_for_season(&self, season_id: DbId)
        -> Result<Vec<Episode>, StoreError>;

    /// Episodes of every season of an anime, ascending by `episode_number`
    /// within each season.
    async fn list_episodes_for_anime(&self, anime_id: DbId) -> Result<Vec<Episode>, StoreError>;
}

/// [`CatalogStore`] backed by the Postgres repositories.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find_anime(&self, id: DbId) -> Result<Option<Anime>, StoreError> {
        AnimeRepo::find_by_id(&self.pool, id).await
    }

    async fn find_season(&self, id: DbId) -> Result<Option<Season>, StoreError> {
        SeasonRepo::find_by_id(&self.pool, id).await
    }

    async fn find_episode(&self, id: DbId) -> Result<Option<Episode>, StoreError> {
        EpisodeRepo::find_by_id(&self.pool, id).await
    }

    async fn list_seasons_for_anime(&self, anime_id: DbId) -> Result<Vec<Season>, StoreError> {
        SeasonRepo::list_for_anime(&self.pool, anime_id).await
    }

    async fn list_episodes_for_season(
        &self,
        season_id: DbId,
    ) -> Result<Vec<Episode>, StoreError> {
        EpisodeRepo::list_for_season(&self.pool, season_id).await
    }

    async fn list_episodes_for_anime(&self, anime_id: DbId) -> Result<Vec<Episode>, StoreError> {
        EpisodeRepo::list_for_anime(&self.pool, anime_id).await
    }
}
