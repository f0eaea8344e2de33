//! Handlers for the public `/anime` catalog resource.

use anistream_core::types::DbId;
use anistream_db::models::season::SeasonWithEpisodes;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::catalog::{assemble_seasons, load_anime_page};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/anime/{anime_id}
///
/// An anime with its seasons and episodes. 404 if the anime does not exist.
pub async fn get_anime_page(
    State(state): State<AppState>,
    Path(anime_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let page =
        load_anime_page(state.store.as_ref(), anime_id, state.config.episode_loading).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/anime/{anime_id}/seasons
///
/// Seasons ordered by number, each with ordered episodes and a count.
/// Always 200; unknown anime and store failures both yield an empty list.
pub async fn list_seasons(
    State(state): State<AppState>,
    Path(anime_id): Path<DbId>,
) -> Json<DataResponse<Vec<SeasonWithEpisodes>>> {
    let seasons =
        assemble_seasons(state.store.as_ref(), anime_id, state.config.episode_loading).await;
    Json(DataResponse { data: seasons })
}
