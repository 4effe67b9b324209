use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::content::application::domain::entities::ContentKind;
use crate::content::application::use_cases::upload_content::{
    UploadContentError, UploadContentInput, UploadPayload,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ContentItemResponse;

/// JSON body for link-based uploads
#[derive(Deserialize, ToSchema)]
pub struct UploadYoutubeRequest {
    #[schema(example = "Intro to Algebra")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub youtube_url: String,
}

/// Query metadata accompanying a raw file body
#[derive(Deserialize, IntoParams)]
pub struct UploadFileQuery {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of video, pdf, audio, image
    pub kind: String,
    /// File extension without the dot
    pub extension: String,
}

fn map_upload_error(err: UploadContentError, uploader: &str) -> HttpResponse {
    match &err {
        UploadContentError::NotVerifiedTeacher => {
            warn!(uploader = %uploader, "Upload rejected: not a verified teacher");
            ApiResponse::forbidden(
                "NOT_VERIFIED_TEACHER",
                "Only verified teachers can upload resources",
            )
        }
        UploadContentError::InvalidInput(msg) => {
            warn!(uploader = %uploader, error = %err, "Upload rejected: invalid input");
            ApiResponse::bad_request("INVALID_INPUT", msg)
        }
        other => {
            error!(uploader = %uploader, error = %other, "Upload failed");
            ApiResponse::internal_error()
        }
    }
}

/// Publish a YouTube learning resource
#[utoipa::path(
    post,
    path = "/api/content",
    tag = "content",
    security(("bearer_auth" = [])),
    request_body = UploadYoutubeRequest,
    responses(
        (status = 201, description = "Resource created", body = inline(SuccessResponse<ContentItemResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not a verified teacher", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/content")]
pub async fn upload_youtube_handler(
    auth: AuthenticatedAccount,
    req: web::Json<UploadYoutubeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    info!(uploader = %auth.account_id, title = %req.title, "YouTube upload attempt");

    let result = data
        .upload_content
        .execute(UploadContentInput {
            uploader_id: auth.account_id,
            title: req.title,
            description: req.description,
            payload: UploadPayload::YouTube {
                url: req.youtube_url,
            },
        })
        .await;

    match result {
        Ok(item) => ApiResponse::created(ContentItemResponse::from(item)),
        Err(e) => map_upload_error(e, &auth.account_id.to_string()),
    }
}

/// Publish a file-based learning resource
///
/// The request body is the raw file; metadata rides in the query
/// string.
#[utoipa::path(
    post,
    path = "/api/content/file",
    tag = "content",
    security(("bearer_auth" = [])),
    params(UploadFileQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Resource created", body = inline(SuccessResponse<ContentItemResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not a verified teacher", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/content/file")]
pub async fn upload_file_handler(
    auth: AuthenticatedAccount,
    query: web::Query<UploadFileQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    info!(
        uploader = %auth.account_id,
        title = %query.title,
        kind = %query.kind,
        size = body.len(),
        "File upload attempt"
    );

    let kind = match ContentKind::parse(&query.kind) {
        Some(kind) if kind != ContentKind::Youtube => kind,
        _ => {
            return ApiResponse::bad_request(
                "INVALID_INPUT",
                "kind must be one of video, pdf, audio, image",
            );
        }
    };

    let result = data
        .upload_content
        .execute(UploadContentInput {
            uploader_id: auth.account_id,
            title: query.title,
            description: query.description,
            payload: UploadPayload::File {
                kind,
                extension: query.extension,
                bytes: body.to_vec(),
            },
        })
        .await;

    match result {
        Ok(item) => ApiResponse::created(ContentItemResponse::from(item)),
        Err(e) => map_upload_error(e, &auth.account_id.to_string()),
    }
}
