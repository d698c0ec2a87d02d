//! API error types and response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use todolite_core::StoreError;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The targeted todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// The request body failed validation.
    #[error("{0}")]
    BadRequest(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyText => Self::BadRequest("Title must not be empty".to_owned()),
            StoreError::NotFound(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use todolite_core::TaskId;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("nope".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_convert_to_api_errors() {
        assert!(matches!(
            ApiError::from(StoreError::EmptyText),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(StoreError::NotFound(TaskId(9))),
            ApiError::NotFound
        ));
    }
}
