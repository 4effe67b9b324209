use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::content::application::use_cases::download_content::DownloadContentError;
use crate::content::application::use_cases::view_content::ViewContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ContentItemResponse;

/// Record a view and return the item
#[utoipa::path(
    post,
    path = "/api/content/{slug}/view",
    tag = "content",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Item with bumped view count", body = inline(SuccessResponse<ContentItemResponse>)),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/content/{slug}/view")]
pub async fn view_content_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.view_content.execute(&slug).await {
        Ok(item) => ApiResponse::success(ContentItemResponse::from(item)),
        Err(ViewContentError::ContentNotFound) => {
            warn!(slug = %slug, "View on missing content");
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(e) => {
            error!(slug = %slug, error = %e, "View tracking failed");
            ApiResponse::internal_error()
        }
    }
}

/// Record a download and return the item
#[utoipa::path(
    post,
    path = "/api/content/{slug}/download",
    tag = "content",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Item with bumped download count", body = inline(SuccessResponse<ContentItemResponse>)),
        (status = 400, description = "Item has no downloadable file", body = ErrorResponse),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/content/{slug}/download")]
pub async fn download_content_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.download_content.execute(&slug).await {
        Ok(item) => ApiResponse::success(ContentItemResponse::from(item)),
        Err(DownloadContentError::ContentNotFound) => {
            warn!(slug = %slug, "Download of missing content");
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(DownloadContentError::NotDownloadable) => {
            warn!(slug = %slug, "Download of a link-only item");
            ApiResponse::bad_request("NOT_DOWNLOADABLE", "This resource has no downloadable file")
        }
        Err(e) => {
            error!(slug = %slug, error = %e, "Download tracking failed");
            ApiResponse::internal_error()
        }
    }
}
