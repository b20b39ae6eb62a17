use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Client-facing error taxonomy shared by every crate in the workspace.
///
/// Every variant maps to a 4xx/5xx status in [`IntoResponse`]; none is
/// fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    DuplicateVote(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) | AppError::DuplicateVote(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            // Storage details stay in the logs, not in the response body.
            AppError::Database(_) | AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        let cases = [
            (AppError::InvalidArgument("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("Quote not found".into()), StatusCode::NOT_FOUND),
            (AppError::AlreadyExists("User already exists".into()), StatusCode::CONFLICT),
            (AppError::DuplicateVote("User already upvoted".into()), StatusCode::CONFLICT),
            (AppError::Unauthorized("Invalid credentials".into()), StatusCode::UNAUTHORIZED),
            (AppError::Database("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn display_carries_the_database_detail() {
        let err = AppError::Database("connection refused on 10.0.0.3".into());
        assert_eq!(err.to_string(), "database error: connection refused on 10.0.0.3");
    }
}
