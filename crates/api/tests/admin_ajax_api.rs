//! HTTP-level integration tests for the admin AJAX fetch endpoints.
//!
//! Covers the access guard, identifier validation, found / not-found rows,
//! and store failures. Every response must be a well-formed envelope.

mod common;

use std::sync::Arc;

use anistream_db::memory::MemoryCatalogStore;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, get, get_auth, get_with_cookie, user_token};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Seeded {
    store: Arc<MemoryCatalogStore>,
    anime_id: i64,
    season_id: i64,
    episode_id: i64,
}

fn seeded() -> Seeded {
    let store = Arc::new(MemoryCatalogStore::new());
    let anime = store.insert_anime("Cowboy Bebop");
    let season = store.insert_season(anime.id, 1);
    let episode = store.insert_episode(season.id, 1);
    Seeded {
        store,
        anime_id: anime.id,
        season_id: season.id,
        episode_id: episode.id,
    }
}

fn assert_failure(json: &serde_json::Value, message: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], message);
    assert!(json["payload"].is_null());
}

// ---------------------------------------------------------------------------
// Access guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_anonymous_request_is_denied_without_querying() {
    let s = seeded();
    let before = s.store.query_count();

    let uri = format!("/api/v1/admin/ajax/get_episode?id={}", s.episode_id);
    let response = get(build_test_app(s.store.clone()), &uri).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_failure(&body_json(response).await, "Unauthorized access");
    assert_eq!(s.store.query_count(), before);
}

#[tokio::test]
async fn test_non_admin_is_denied() {
    let s = seeded();
    let uri = format!("/api/v1/admin/ajax/get_season?id={}", s.season_id);

    let response = get_auth(build_test_app(s.store.clone()), &uri, &user_token()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_failure(&body_json(response).await, "Unauthorized access");
}

#[tokio::test]
async fn test_denial_takes_precedence_over_invalid_id() {
    let s = seeded();
    for uri in [
        "/api/v1/admin/ajax/get_episode",
        "/api/v1/admin/ajax/get_episode?id=0",
        "/api/v1/admin/ajax/get_season?id=abc",
    ] {
        let response = get(build_test_app(s.store.clone()), uri).await;
        assert_failure(&body_json(response).await, "Unauthorized access");
    }
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let s = seeded();
    let uri = format!("/api/v1/admin/ajax/get_season?id={}", s.season_id);

    let response = get_auth(build_test_app(s.store.clone()), &uri, "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_failure(&body_json(response).await, "Unauthorized access");
}

// ---------------------------------------------------------------------------
// Identifier validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_episode_id_zero_is_rejected_without_querying() {
    let s = seeded();
    let before = s.store.query_count();

    let response = get_auth(
        build_test_app(s.store.clone()),
        "/api/v1/admin/ajax/get_episode?id=0",
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_failure(&body_json(response).await, "Episode ID is required");
    assert_eq!(s.store.query_count(), before, "no store query may be issued");
}

#[tokio::test]
async fn test_missing_and_non_numeric_ids_are_rejected() {
    let s = seeded();
    let cases = [
        ("/api/v1/admin/ajax/get_season", "Season ID is required"),
        ("/api/v1/admin/ajax/get_season?id=", "Season ID is required"),
        ("/api/v1/admin/ajax/get_season?id=-4", "Season ID is required"),
        ("/api/v1/admin/ajax/get_episode?id=ten", "Episode ID is required"),
        ("/api/v1/admin/ajax/get_anime?id=1e3", "Anime ID is required"),
    ];

    for (uri, message) in cases {
        let response = get_auth(build_test_app(s.store.clone()), uri, &admin_token()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_failure(&body_json(response).await, message);
    }
    assert_eq!(s.store.query_count(), 0);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_episode_returns_row_verbatim() {
    let s = seeded();
    let expected = serde_json::to_value(
        s.store
            .episodes_snapshot()
            .into_iter()
            .find(|e| e.id == s.episode_id)
            .unwrap(),
    )
    .unwrap();
    let before = s.store.query_count();

    let uri = format!("/api/v1/admin/ajax/get_episode?id={}", s.episode_id);
    let response = get_auth(build_test_app(s.store.clone()), &uri, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "application/json",
        "envelope must be JSON"
    );
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "");
    assert_eq!(json["payload"], expected);
    assert_eq!(s.store.query_count() - before, 1, "exactly one read query");
}

#[tokio::test]
async fn test_get_season_and_anime() {
    let s = seeded();

    let uri = format!("/api/v1/admin/ajax/get_season?id={}", s.season_id);
    let response = get_auth(build_test_app(s.store.clone()), &uri, &admin_token()).await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["payload"]["id"], s.season_id);
    assert_eq!(json["payload"]["anime_id"], s.anime_id);
    assert_eq!(json["payload"]["season_number"], 1);

    let uri = format!("/api/v1/admin/ajax/get_anime?id={}", s.anime_id);
    let response = get_auth(build_test_app(s.store.clone()), &uri, &admin_token()).await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["payload"]["title"], "Cowboy Bebop");
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let s = seeded();
    let uri = format!("/api/v1/admin/ajax/get_season?id={}", s.season_id);

    let response = get_with_cookie(build_test_app(s.store.clone()), &uri, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let s = seeded();
    let cases = [
        ("get_anime", "Anime not found"),
        ("get_season", "Season not found"),
        ("get_episode", "Episode not found"),
    ];

    for (endpoint, message) in cases {
        let uri = format!("/api/v1/admin/ajax/{endpoint}?id=424242");
        let response = get_auth(build_test_app(s.store.clone()), &uri, &admin_token()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_failure(&body_json(response).await, message);
    }
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_store_failure_becomes_database_error_envelope() {
    let s = seeded();
    s.store.fail_queries(true);

    let uri = format!("/api/v1/admin/ajax/get_episode?id={}", s.episode_id);
    let response = get_auth(build_test_app(s.store.clone()), &uri, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["payload"].is_null());
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("Database error: "), "{message}");
}

#[tokio::test]
async fn test_duplicate_primary_key_is_not_silently_collapsed() {
    let s = seeded();
    let duplicate = s
        .store
        .seasons_snapshot()
        .into_iter()
        .find(|season| season.id == s.season_id)
        .unwrap();
    s.store.push_season_row(duplicate);

    let uri = format!("/api/v1/admin/ajax/get_season?id={}", s.season_id);
    let response = get_auth(build_test_app(s.store.clone()), &uri, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        format!(
            "Database error: seasons returned 2 rows for primary key {}",
            s.season_id
        )
    );
}
