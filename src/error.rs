// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::password::PasswordError;
use crate::auth::TokenError;
use crate::database::store::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every failure in the request path funnels through here on its way out;
/// handlers never build error responses by hand.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),
    DuplicateEmail,

    // 401 Unauthorized
    InvalidCredentials,
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message. "No such user" and "wrong password" collapse to
    /// the same text so login failures leak nothing about which part failed.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) => msg,
            ApiError::DuplicateEmail => "User already exists",
            ApiError::InvalidCredentials => "Invalid credentials",
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            // Internal detail is logged, never sent to production clients
            ApiError::Internal(_) => "Something went wrong",
        }
    }

    pub fn to_json(&self) -> Value {
        let mut body = json!({ "message": self.message() });

        if let ApiError::Internal(detail) = self {
            if !crate::config::config().environment.is_production() {
                body["detail"] = json!(detail);
            }
        }

        body
    }
}

// Static constructors, mirroring how handlers talk about failures
impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // Covers the registration race: the store rejecting a duplicate
            // insert is reported exactly like the pre-check catching it
            StoreError::DuplicateKey => ApiError::DuplicateEmail,
            StoreError::Database(e) => {
                tracing::error!("store error: {e}");
                ApiError::internal(e.to_string())
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            // Verification failures are mapped to Unauthorized at the call
            // site; reaching here means signing itself broke
            TokenError::Invalid => ApiError::unauthorized("Invalid token"),
            other => {
                tracing::error!("token error: {other}");
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        tracing::error!("password error: {err}");
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
