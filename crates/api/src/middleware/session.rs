//! Session extractor for Axum handlers.
//!
//! Unlike a typical auth extractor this never rejects: a missing, malformed
//! or expired token produces an anonymous [`Session`], and the access guard
//! decides what the caller may see.

use std::convert::Infallible;

use anistream_core::access::Session;
use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::auth::jwt::validate_token;
use crate::state::AppState;

/// Name of the cookie that may carry the access token.
pub const SESSION_COOKIE: &str = "session";

/// The caller's [`Session`], built from `Authorization: Bearer <token>` or,
/// failing that, the `session` cookie.
///
/// ```ignore
/// async fn handler(SessionContext(session): SessionContext) -> impl IntoResponse {
///     authorize(&session);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionContext(pub Session);

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(&parts.headers) else {
            return Ok(SessionContext(Session::anonymous()));
        };

        let session = match validate_token(token, &state.config.jwt) {
            Ok(claims) => Session::authenticated(claims.sub, claims.role),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid session token");
                Session::anonymous()
            }
        };
        Ok(SessionContext(session))
    }
}

/// Find the access token in the request headers.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    bearer.or_else(|| {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.trim())
            .filter(|t| !t.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_cookie_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session=tok.en; lang=ja"),
        );
        assert_eq!(extract_token(&headers), Some("tok.en"));
    }

    #[test]
    fn test_bearer_takes_precedence_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert(COOKIE, HeaderValue::from_static("session=from-cookie"));
        assert_eq!(extract_token(&headers), Some("from-header"));
    }

    #[test]
    fn test_missing_or_malformed_yields_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        headers.insert(COOKIE, HeaderValue::from_static("sessionid=x; session="));
        assert_eq!(extract_token(&headers), None);
    }
}
