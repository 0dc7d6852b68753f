use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No image file provided")]
    NoImageProvided,

    #[error("No file selected")]
    NoFileSelected,

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Multipart(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoImageProvided | AppError::NoFileSelected => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Multipart(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::Multipart(err.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match &self {
            AppError::NoImageProvided | AppError::NoFileSelected => {}
            AppError::PayloadTooLarge(msg) => tracing::warn!("⚠️  Upload rejected: {}", msg),
            AppError::Io(e) => tracing::error!("❌ Upload error: {:?}", e),
            AppError::Internal(e) => tracing::error!("❌ Upload error: {:?}", e),
            AppError::Multipart(msg) => tracing::error!("❌ Upload error: {}", msg),
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
