//! JSON response envelope and API errors.
//!
//! Every response carries a `status` of `success`, `fail` (client error) or
//! `error` (server error). Errors render `{status, message, error?}`.

use std::fmt::Display;

use salvo::{
    Scribe,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Envelope status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    Success,
    Fail,
    Error,
}

/// Error Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorEnvelope {
    /// `fail` for client errors, `error` for server errors
    pub status: Status,

    /// Human readable description
    pub message: String,

    /// Underlying error, for diagnostics only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An error response.
#[derive(Debug, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    status_code: StatusCode,
    message: String,
    error: Option<String>,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.into(),
            error: None,
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            message: message.into(),
            error: None,
        }
    }

    /// A logged 500 whose message stays generic; the source is attached as `error`.
    pub(crate) fn internal(message: impl Into<String>, source: &dyn Display) -> Self {
        let message = message.into();

        error!("{message}: {source}");

        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            message,
            error: Some(source.to_string()),
        }
    }

    pub(crate) fn route_not_found() -> Self {
        Self::not_found("Route not found")
    }

    pub(crate) fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn envelope(self) -> ErrorEnvelope {
        let status = if self.status_code.is_server_error() {
            Status::Error
        } else {
            Status::Fail
        };

        ErrorEnvelope {
            status,
            message: self.message,
            error: self.error,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(self.envelope()));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for code in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            operation.responses.insert(
                code.as_str(),
                oapi::Response::new(code.canonical_reason().unwrap_or_default())
                    .add_content("application/json", ErrorEnvelope::to_schema(components)),
            );
        }
    }
}
