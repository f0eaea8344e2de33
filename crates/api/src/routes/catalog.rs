//! Route definitions for the public `/anime` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/anime`.
///
/// ```text
/// GET /{anime_id}          -> get_anime_page
/// GET /{anime_id}/seasons  -> list_seasons
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{anime_id}", get(catalog::get_anime_page))
        .route("/{anime_id}/seasons", get(catalog::list_seasons))
}
