//! Handlers for the admin panel's AJAX fetch endpoints.
//!
//! Every response, including failures, is a `{ success, message, payload }`
//! envelope with `Content-Type: application/json`.

use anistream_core::access::Session;
use anistream_core::catalog::EntityKind;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::catalog::{fetch_entity, CatalogEntity};
use crate::middleware::session::SessionContext;
use crate::query::IdParams;
use crate::response::{Envelope, EnvelopeResponse};
use crate::state::AppState;

/// GET /api/v1/admin/ajax/get_anime?id={id}
pub async fn get_anime(
    State(state): State<AppState>,
    SessionContext(session): SessionContext,
    params: Result<Query<IdParams>, QueryRejection>,
) -> EnvelopeResponse<CatalogEntity> {
    fetch(&state, &session, EntityKind::Anime, params).await
}

/// GET /api/v1/admin/ajax/get_season?id={id}
pub async fn get_season(
    State(state): State<AppState>,
    SessionContext(session): SessionContext,
    params: Result<Query<IdParams>, QueryRejection>,
) -> EnvelopeResponse<CatalogEntity> {
    fetch(&state, &session, EntityKind::Season, params).await
}

/// GET /api/v1/admin/ajax/get_episode?id={id}
pub async fn get_episode(
    State(state): State<AppState>,
    SessionContext(session): SessionContext,
    params: Result<Query<IdParams>, QueryRejection>,
) -> EnvelopeResponse<CatalogEntity> {
    fetch(&state, &session, EntityKind::Episode, params).await
}

async fn fetch(
    state: &AppState,
    session: &Session,
    kind: EntityKind,
    params: Result<Query<IdParams>, QueryRejection>,
) -> EnvelopeResponse<CatalogEntity> {
    // An unparseable query string is treated like a missing id.
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let result = fetch_entity(state.store.as_ref(), session, kind, params.id.as_deref()).await;
    Envelope::from_result(result)
}
