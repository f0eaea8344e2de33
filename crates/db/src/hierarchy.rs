//! Seasons-with-episodes aggregation for a single anime.
//!
//! Two loading strategies produce the same shape and ordering:
//!
//! - [`EpisodeLoading::PerSeason`] -- one query for the seasons, then one
//!   query per season for its episodes (N+1).
//! - [`EpisodeLoading::Grouped`] -- one query for the seasons and one for all
//!   episodes of the anime, grouped in memory by `season_id`.
//!
//! Neither strategy runs inside a transaction, so a season and its episodes
//! may reflect slightly different points in time under concurrent writes.

use std::collections::HashMap;

use anistream_core::types::DbId;

use crate::error::StoreError;
use crate::models::episode::Episode;
use crate::models::season::{Season, SeasonWithEpisodes};
use crate::store::CatalogStore;

pub const LOADING_PER_SEASON: &str = "per_season";
pub const LOADING_GROUPED: &str = "grouped";

/// All valid episode loading strategy names.
pub const VALID_LOADING_STRATEGIES: &[&str] = &[LOADING_PER_SEASON, LOADING_GROUPED];

/// How episodes are loaded when assembling a season hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EpisodeLoading {
    #[default]
    PerSeason,
    Grouped,
}

impl EpisodeLoading {
    /// Convert from a configuration string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            LOADING_PER_SEASON => Ok(Self::PerSeason),
            LOADING_GROUPED => Ok(Self::Grouped),
            _ => Err(format!(
                "Invalid episode loading strategy '{s}'. Must be one of: {}",
                VALID_LOADING_STRATEGIES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerSeason => LOADING_PER_SEASON,
            Self::Grouped => LOADING_GROUPED,
        }
    }
}

/// Load every season of `anime_id` with its ordered episodes.
///
/// Seasons come back ascending by `season_number` (ties keep store order),
/// episodes ascending by `episode_number`. An anime without seasons yields an
/// empty vector. Store failures are returned to the caller.
pub async fn assemble_seasons(
    store: &dyn CatalogStore,
    anime_id: DbId,
    loading: EpisodeLoading,
) -> Result<Vec<SeasonWithEpisodes>, StoreError> {
    let seasons = store.list_seasons_for_anime(anime_id).await?;
    if seasons.is_empty() {
        return Ok(Vec::new());
    }

    let result = match loading {
        EpisodeLoading::PerSeason => {
            let mut result = Vec::with_capacity(seasons.len());
            for season in seasons {
                let episodes = store.list_episodes_for_season(season.id).await?;
                result.push(SeasonWithEpisodes::new(season, episodes));
            }
            result
        }
        EpisodeLoading::Grouped => {
            let episodes = store.list_episodes_for_anime(anime_id).await?;
            group_episodes(seasons, episodes)
        }
    };

    tracing::debug!(
        anime_id,
        seasons = result.len(),
        loading = loading.as_str(),
        "Assembled season hierarchy"
    );
    Ok(result)
}

/// Attach episodes to their seasons, preserving season order.
///
/// Episodes whose `season_id` matches none of `seasons` are dropped.
pub fn group_episodes(seasons: Vec<Season>, episodes: Vec<Episode>) -> Vec<SeasonWithEpisodes> {
    let mut by_season: HashMap<DbId, Vec<Episode>> = HashMap::with_capacity(seasons.len());
    for episode in episodes {
        by_season.entry(episode.season_id).or_default().push(episode);
    }

    seasons
        .into_iter()
        .map(|season| {
            let mut episodes = by_season.remove(&season.id).unwrap_or_default();
            episodes.sort_by_key(|e| e.episode_number);
            SeasonWithEpisodes::new(season, episodes)
        })
        .collect()
}
