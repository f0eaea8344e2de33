//! Route definitions for the admin AJAX endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_ajax;
use crate::state::AppState;

/// Routes mounted at `/admin/ajax`.
///
/// ```text
/// GET /get_anime?id=    -> get_anime
/// GET /get_season?id=   -> get_season
/// GET /get_episode?id=  -> get_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_anime", get(admin_ajax::get_anime))
        .route("/get_season", get(admin_ajax::get_season))
        .route("/get_episode", get(admin_ajax::get_episode))
}
