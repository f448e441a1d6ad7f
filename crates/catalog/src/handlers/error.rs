use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use catalog_core::catalog::{CategoryError, ProductError};
use catalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// Request that never reached the usecase: malformed JSON, bad path, and so on.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BadRequest(pub String);

/// Handler error. Renders as `{"error": "..."}` with a status derived from the
/// wrapped error.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Wraps an extractor rejection as a 400.
    pub fn bad_request(err: impl Display) -> Self {
        Self(BadRequest(err.to_string()).into())
    }

    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            return StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        }

        if self.0.is::<BadRequest>() || self.0.is::<CategoryError>() || self.0.is::<ProductError>()
        {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::storage::PRODUCT_ENTITY;

    #[test]
    fn test_repository_errors_use_mapping() {
        let not_found = AppError::from(RepositoryError::not_found(PRODUCT_ENTITY, 1));
        let unavailable = AppError::from(RepositoryError::ConnectionFailed("gone".to_string()));
        let invalid = AppError::from(RepositoryError::InvalidData("bad ref".to_string()));

        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(
            AppError::from(ProductError::NegativePrice(-1.0)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CategoryError::EmptyName).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::bad_request("expected value at line 1").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_response_body_carries_message() {
        use http_body_util::BodyExt;

        let response = AppError::from(RepositoryError::not_found(PRODUCT_ENTITY, 7)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Product not found: 7");
    }
}
