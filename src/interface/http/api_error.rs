use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;
use uuid::Uuid;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Boundary between the domain taxonomy and the HTTP contract. The contract
/// is status-code-only: error responses carry an empty body, so the real
/// cause goes to the log, keyed by a correlation id.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
}

impl ApiError {
    pub fn from_domain(error: DomainError) -> Self {
        let status = match &error {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Storage(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::logged(status, &error)
    }

    /// Create collapses persistence failures into a generic client error:
    /// whatever the storage-level cause, the row the client sent was never
    /// stored. Only genuinely internal failures stay a 500.
    pub fn from_create_failure(error: DomainError) -> Self {
        let status = match &error {
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::logged(status, &error)
    }

    fn logged(status: StatusCode, error: &DomainError) -> Self {
        warn!(
            correlation_id = %Uuid::new_v4(),
            status = status.as_u16(),
            error = %error,
            "request failed"
        );
        Self { status }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status.into_response()
    }
}
