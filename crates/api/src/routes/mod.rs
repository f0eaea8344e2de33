pub mod admin;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/ajax/get_anime?id=          single anime row (admin, envelope)
/// /admin/ajax/get_season?id=         single season row (admin, envelope)
/// /admin/ajax/get_episode?id=        single episode row (admin, envelope)
///
/// /anime/{anime_id}                  anime with seasons and episodes (public)
/// /anime/{anime_id}/seasons          seasons with episodes (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin/ajax", admin::router())
        .nest("/anime", catalog::router())
}
