use std::sync::Arc;

use anistream_db::store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog row store (Postgres in production, in-memory in tests).
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration (JWT settings, episode loading strategy).
    pub config: Arc<ServerConfig>,
}
