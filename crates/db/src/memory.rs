//! In-memory [`CatalogStore`] for test suites (feature `test-utils`).
//!
//! Rows are kept in insertion order, which plays the role of "store-returned
//! order" for ties. Every trait call counts as one query; [`fail_queries`]
//! makes subsequent calls return a connection error.
//!
//! [`fail_queries`]: MemoryCatalogStore::fail_queries

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use anistream_core::types::DbId;
use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;
use crate::models::anime::Anime;
use crate::models::episode::Episode;
use crate::models::season::Season;
use crate::store::CatalogStore;

#[derive(Default)]
struct Tables {
    anime: Vec<Anime>,
    seasons: Vec<Season>,
    episodes: Vec<Episode>,
    next_id: DbId,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
    queries: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries issued against this store so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Make every subsequent query fail (or succeed again with `false`).
    pub fn fail_queries(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn insert_anime(&self, title: &str) -> Anime {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let anime = Anime {
            id: tables.next_id(),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: None,
            poster_url: None,
            release_year: None,
            created_at: now,
            updated_at: now,
        };
        tables.anime.push(anime.clone());
        anime
    }

    pub fn insert_season(&self, anime_id: DbId, season_number: i32) -> Season {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let season = Season {
            id: tables.next_id(),
            anime_id,
            season_number,
            title: Some(format!("Season {season_number}")),
            description: None,
            release_date: None,
            created_at: now,
            updated_at: now,
        };
        tables.seasons.push(season.clone());
        season
    }

    pub fn insert_episode(&self, season_id: DbId, episode_number: i32) -> Episode {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let episode = Episode {
            id: tables.next_id(),
            season_id,
            episode_number,
            title: Some(format!("Episode {episode_number}")),
            description: None,
            video_url: Some(format!("https://cdn.example.test/{season_id}/{episode_number}.m3u8")),
            thumbnail_url: None,
            duration_secs: Some(1440),
            created_at: now,
            updated_at: now,
        };
        tables.episodes.push(episode.clone());
        episode
    }

    /// All season rows in insertion order. Does not count as a query.
    pub fn seasons_snapshot(&self) -> Vec<Season> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner).seasons.clone()
    }

    /// All episode rows in insertion order. Does not count as a query.
    pub fn episodes_snapshot(&self) -> Vec<Episode> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner).episodes.clone()
    }

    /// Insert a season row verbatim, including its id. Allows duplicate keys.
    pub fn push_season_row(&self, season: Season) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .seasons
            .push(season);
    }

    fn begin_query(&self) -> Result<(), StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T, StoreError> {
        self.begin_query()?;
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&tables))
    }
}

fn by_id<T: Clone>(rows: &[T], id: DbId, key: impl Fn(&T) -> DbId) -> Vec<T> {
    rows.iter().filter(|r| key(r) == id).cloned().collect()
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.begin_query()
    }

    async fn find_anime(&self, id: DbId) -> Result<Option<Anime>, StoreError> {
        let rows = self.read(|t| by_id(&t.anime, id, |a| a.id))?;
        StoreError::expect_unique("anime", id, rows)
    }

    async fn find_season(&self, id: DbId) -> Result<Option<Season>, StoreError> {
        let rows = self.read(|t| by_id(&t.seasons, id, |s| s.id))?;
        StoreError::expect_unique("seasons", id, rows)
    }

    async fn find_episode(&self, id: DbId) -> Result<Option<Episode>, StoreError> {
        let rows = self.read(|t| by_id(&t.episodes, id, |e| e.id))?;
        StoreError::expect_unique("episodes", id, rows)
    }

    async fn list_seasons_for_anime(&self, anime_id: DbId) -> Result<Vec<Season>, StoreError> {
        let mut seasons = self.read(|t| by_id(&t.seasons, anime_id, |s| s.anime_id))?;
        seasons.sort_by_key(|s| s.season_number);
        Ok(seasons)
    }

    async fn list_episodes_for_season(
        &self,
        season_id: DbId,
    ) -> Result<Vec<Episode>, StoreError> {
        let mut episodes = self.read(|t| by_id(&t.episodes, season_id, |e| e.season_id))?;
        episodes.sort_by_key(|e| e.episode_number);
        Ok(episodes)
    }

    async fn list_episodes_for_anime(&self, anime_id: DbId) -> Result<Vec<Episode>, StoreError> {
        let mut episodes = self.read(|t| {
            let season_ids: Vec<DbId> = t
                .seasons
                .iter()
                .filter(|s| s.anime_id == anime_id)
                .map(|s| s.id)
                .collect();
            t.episodes
                .iter()
                .filter(|e| season_ids.contains(&e.season_id))
                .cloned()
                .collect::<Vec<_>>()
        })?;
        episodes.sort_by_key(|e| (e.season_id, e.episode_number));
        Ok(episodes)
    }
}
