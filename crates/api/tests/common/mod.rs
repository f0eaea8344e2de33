//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production) with
//! `tower::ServiceExt::oneshot`, backed by an in-memory catalog store.

#![allow(dead_code)]

use std::sync::Arc;

use anistream_api::auth::jwt::{Claims, JwtConfig};
use anistream_api::config::ServerConfig;
use anistream_api::router::build_app_router;
use anistream_api::state::AppState;
use anistream_core::roles::{ROLE_ADMIN, ROLE_USER};
use anistream_db::hierarchy::EpisodeLoading;
use anistream_db::memory::MemoryCatalogStore;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;
use uuid::Uuid;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(episode_loading: EpisodeLoading) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        episode_loading,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
        },
    }
}

/// Build the full application router over `store` with the default
/// (per-season) episode loading.
pub fn build_test_app(store: Arc<MemoryCatalogStore>) -> Router {
    build_test_app_with(store, EpisodeLoading::PerSeason)
}

pub fn build_test_app_with(store: Arc<MemoryCatalogStore>, loading: EpisodeLoading) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config(loading)),
    };
    build_app_router(state)
}

pub fn admin_token() -> String {
    token_for(1, ROLE_ADMIN)
}

pub fn user_token() -> String {
    token_for(2, ROLE_USER)
}

/// Sign a 15-minute HS256 token with the test secret, as the account
/// service would.
pub fn token_for(user_id: i64, role: &str) -> String {
    let config = test_config(EpisodeLoading::default());
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: now + 15 * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
    )
    .expect("token signing should succeed")
}

/// Send a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request carrying the token in the `session` cookie.
pub async fn get_with_cookie(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, format!("session={token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
