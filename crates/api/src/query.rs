//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// The `?id=` parameter of the admin AJAX fetch endpoints.
///
/// Kept as a raw string so that missing and non-numeric values reach the
/// fetcher and produce an envelope instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}
