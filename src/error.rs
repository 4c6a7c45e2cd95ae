use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::db::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or falsy required field, or an undecodable body.
    #[error("{0}")]
    Validation(String),

    /// Path identifier that does not resolve to a row.
    #[error("{0}")]
    NotFound(&'static str),

    /// Write refused because dependent rows still exist.
    #[error("{0}")]
    Conflict(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "menu not found")]
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Storage(e) => {
                error!(error = %e, "Storage failure");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorBody {
                error: self.to_string(),
            }),
        }
    }
}
