//! Single-row fetches for the admin panel.
//!
//! Order of checks: access guard, identifier validation, then exactly one
//! store query. Failures are returned as [`AppError`] and mapped to an
//! envelope by the handler.
//!
//! [`AppError`]: crate::error::AppError

use anistream_core::access::{authorize, Access, Session};
use anistream_core::catalog::{not_found, parse_entity_id, EntityKind};
use anistream_core::error::CoreError;
use anistream_db::models::anime::Anime;
use anistream_db::models::episode::Episode;
use anistream_db::models::season::Season;
use anistream_db::store::CatalogStore;
use serde::Serialize;

use crate::error::AppResult;

/// A row returned verbatim by [`fetch_entity`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEntity {
    Anime(Anime),
    Season(Season),
    Episode(Episode),
}

/// Fetch one row of `kind` by its raw `?id=` value on behalf of `session`.
///
/// Denied sessions and invalid ids never reach the store.
pub async fn fetch_entity(
    store: &dyn CatalogStore,
    session: &Session,
    kind: EntityKind,
    raw_id: Option<&str>,
) -> AppResult<CatalogEntity> {
    if let Access::Deny(reason) = authorize(session) {
        tracing::warn!(kind = kind.label(), "Denied catalog fetch");
        return Err(CoreError::Unauthorized(reason.to_string()).into());
    }

    let id = parse_entity_id(kind, raw_id)?;

    let row = match kind {
        EntityKind::Anime => store.find_anime(id).await?.map(CatalogEntity::Anime),
        EntityKind::Season => store.find_season(id).await?.map(CatalogEntity::Season),
        EntityKind::Episode => store.find_episode(id).await?.map(CatalogEntity::Episode),
    };

    row.ok_or_else(|| not_found(kind, id).into())
}
