use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Domain errors for catalog operations.
///
/// Exactly two kinds exist: a missing product and rejected input. Both are
/// terminal and non-retryable; they propagate unchanged to the transport
/// layer, which maps them to 404 and 400.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i64),

    #[error("Invalid product input: {0}")]
    InvalidInput(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::InvalidInput(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
