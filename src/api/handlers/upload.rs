use crate::AppState;
use crate::api::error::AppError;
use crate::services::upload_service::UploadRequest;
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "图片上传成功";

#[derive(Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub size: u64,
    pub label: String,
}

/// Multipart form accepted by `POST /upload`
#[derive(ToSchema)]
pub struct UploadForm {
    /// Image file; stored as-is with a `.jpg` name
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Optional free-text label embedded in the stored filename
    pub label: Option<String>,
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data", description = "Image upload"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "No image part or empty filename", body = crate::api::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Storage or multipart failure", body = crate::api::error::ErrorResponse)
    ),
    tag = "upload"
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    // Anything that is not multipart/form-data carries no file part at all
    let mut multipart = multipart.map_err(|_| AppError::NoImageProvided)?;

    let mut image: Option<(String, Bytes)> = None;
    let mut label: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" && image.is_none() {
            // A part without a filename is a plain form value, not a file
            let Some(file_name) = field.file_name().map(str::to_string) else {
                continue;
            };
            let data = field.bytes().await?;
            image = Some((file_name, data));
        } else if name == "label" && label.is_none() {
            label = Some(field.text().await?);
        }
    }

    let (file_name, data) = image.ok_or(AppError::NoImageProvided)?;
    if file_name.is_empty() {
        return Err(AppError::NoFileSelected);
    }

    let request = UploadRequest {
        image: data,
        label: label.unwrap_or_default(),
    };
    let stored = state.uploads.store(&request).await?;

    Ok(Json(UploadResponse {
        success: true,
        message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        filename: stored.filename,
        size: stored.size,
        label: request.label,
    }))
}
