use anistream_core::error::CoreError;
use anistream_db::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for row store
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses; envelope endpoints render it through
/// [`crate::response::Envelope`] instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `anistream_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A row store failure.
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Core(CoreError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => "NOT_FOUND",
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Core(CoreError::Unauthorized(_)) => "UNAUTHORIZED",
            AppError::Store(_) => "DATABASE_ERROR",
        }
    }

    /// Caller-facing message, without the `CoreError` variant prefix.
    ///
    /// Store failures keep their detail (`"Database error: <detail>"`).
    pub fn message(&self) -> String {
        match self {
            AppError::Core(CoreError::Validation(msg))
            | AppError::Core(CoreError::Unauthorized(msg)) => msg.clone(),
            AppError::Core(core @ CoreError::NotFound { .. }) => core.to_string(),
            AppError::Store(err) => format!("Database error: {err}"),
        }
    }

    /// Log server-side failures. Client errors are not logged.
    pub fn log(&self) {
        match self {
            AppError::Store(StoreError::Integrity { table, id, count }) => {
                tracing::error!(
                    table = *table,
                    id = *id,
                    count = *count,
                    "Primary key matched more than one row"
                );
            }
            AppError::Store(err) => tracing::error!(error = %err, "Database error"),
            AppError::Core(_) => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let message = if status.is_server_error() {
            "An internal error occurred".to_string()
        } else {
            self.message()
        };

        let body = json!({
            "error": message,
            "code": self.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
