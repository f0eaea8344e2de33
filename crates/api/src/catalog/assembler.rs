//! Public catalog views built on the season hierarchy.
//!
//! No access guard: these serve unauthenticated catalog browsing.

use anistream_core::catalog::{not_found, EntityKind};
use anistream_core::types::DbId;
use anistream_db::hierarchy::{self, EpisodeLoading};
use anistream_db::models::anime::Anime;
use anistream_db::models::season::SeasonWithEpisodes;
use anistream_db::store::CatalogStore;
use serde::Serialize;

use crate::error::AppResult;

/// An anime with its full season hierarchy, as shown on the title page.
#[derive(Debug, Clone, Serialize)]
pub struct AnimeWithSeasons {
    #[serde(flatten)]
    pub anime: Anime,
    pub seasons: Vec<SeasonWithEpisodes>,
}

/// Seasons of `anime_id` with their episodes, or an empty list.
///
/// Store failures are logged and degrade to "no data" so a page render is
/// never aborted.
pub async fn assemble_seasons(
    store: &dyn CatalogStore,
    anime_id: DbId,
    loading: EpisodeLoading,
) -> Vec<SeasonWithEpisodes> {
    match hierarchy::assemble_seasons(store, anime_id, loading).await {
        Ok(seasons) => seasons,
        Err(e) => {
            tracing::error!(
                anime_id,
                loading = loading.as_str(),
                error = %e,
                "Failed to load seasons, serving empty list"
            );
            Vec::new()
        }
    }
}

/// Load an anime and its seasons for the public title page.
///
/// A missing anime is an error; a failing season query only empties
/// `seasons`.
pub async fn load_anime_page(
    store: &dyn CatalogStore,
    anime_id: DbId,
    loading: EpisodeLoading,
) -> AppResult<AnimeWithSeasons> {
    let anime = store
        .find_anime(anime_id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Anime, anime_id))?;

    let seasons = assemble_seasons(store, anime.id, loading).await;
    Ok(AnimeWithSeasons { anime, seasons })
}
