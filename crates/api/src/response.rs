//! Shared response envelope types for API handlers.
//!
//! Public catalog endpoints use a `{ "data": ... }` envelope
//! ([`DataResponse`]). Admin AJAX endpoints use the
//! `{ "success", "message", "payload" }` envelope ([`Envelope`]), which is
//! always returned as a well-formed JSON body, including on failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": bool, "message": string, "payload": T | null }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub payload: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            payload: Some(payload),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            payload: None,
        }
    }

    /// Map a handler result into an envelope and its HTTP status.
    ///
    /// This is the single place where error kinds become wire messages.
    pub fn from_result(result: AppResult<T>) -> EnvelopeResponse<T> {
        match result {
            Ok(payload) => EnvelopeResponse {
                status: StatusCode::OK,
                envelope: Self::ok(payload),
            },
            Err(err) => {
                err.log();
                EnvelopeResponse {
                    status: err.status(),
                    envelope: Self::failure(err.message()),
                }
            }
        }
    }
}

/// An [`Envelope`] paired with the status it is sent with.
#[derive(Debug)]
pub struct EnvelopeResponse<T: Serialize> {
    pub status: StatusCode,
    pub envelope: Envelope<T>,
}

impl<T: Serialize> IntoResponse for EnvelopeResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
