use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::content::application::use_cases::set_cover_image::{
    SetCoverImageError, SetCoverImageInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ContentItemResponse;

/// Query metadata accompanying the raw image body
#[derive(Deserialize, IntoParams)]
pub struct CoverImageQuery {
    /// File extension without the dot
    pub extension: String,
}

/// Attach a cover image to a learning resource
///
/// The request body is the raw image; a replaced cover is cleaned up.
#[utoipa::path(
    post,
    path = "/api/content/{slug}/cover",
    tag = "content",
    security(("bearer_auth" = [])),
    params(
        ("slug" = String, Path, description = "Content slug"),
        CoverImageQuery,
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Cover set", body = inline(SuccessResponse<ContentItemResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller may not change this item", body = ErrorResponse),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/content/{slug}/cover")]
pub async fn set_cover_image_handler(
    auth: AuthenticatedAccount,
    path: web::Path<String>,
    query: web::Query<CoverImageQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    info!(
        slug = %slug,
        caller = %auth.account_id,
        size = body.len(),
        "Cover image upload attempt"
    );

    let result = data
        .set_cover
        .execute(SetCoverImageInput {
            caller_id: auth.account_id,
            slug: slug.clone(),
            extension: query.into_inner().extension,
            bytes: body.to_vec(),
        })
        .await;

    match result {
        Ok(item) => ApiResponse::success(ContentItemResponse::from(item)),
        Err(SetCoverImageError::ContentNotFound) => {
            warn!(slug = %slug, "Cover upload for missing content");
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(SetCoverImageError::NotAllowed) => {
            warn!(slug = %slug, caller = %auth.account_id, "Cover upload not allowed");
            ApiResponse::forbidden(
                "NOT_ALLOWED",
                "Only the uploader or an operator may change the cover",
            )
        }
        Err(SetCoverImageError::InvalidInput(msg)) => {
            warn!(slug = %slug, "Cover upload rejected: invalid input");
            ApiResponse::bad_request("INVALID_INPUT", msg)
        }
        Err(e) => {
            error!(slug = %slug, error = %e, "Cover upload failed");
            ApiResponse::internal_error()
        }
    }
}
