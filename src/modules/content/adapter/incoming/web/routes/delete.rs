use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::api::schemas::ErrorResponse;
use crate::content::application::use_cases::delete_content::DeleteContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a learning resource (uploader or operator only)
#[utoipa::path(
    delete,
    path = "/api/content/{content_id}",
    tag = "content",
    security(("bearer_auth" = [])),
    params(("content_id" = Uuid, Path, description = "Content id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller may not delete this item", body = ErrorResponse),
        (status = 404, description = "No such item", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/content/{content_id}")]
pub async fn delete_content_handler(
    auth: AuthenticatedAccount,
    path: web::Path<uuid::Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_id = path.into_inner();

    match data
        .delete_content
        .execute(auth.account_id, content_id)
        .await
    {
        Ok(()) => {
            info!(content_id = %content_id, caller = %auth.account_id, "Content deleted");
            ApiResponse::no_content()
        }
        Err(DeleteContentError::ContentNotFound) => {
            warn!(content_id = %content_id, "Delete of missing content");
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(DeleteContentError::NotAllowed) => {
            warn!(content_id = %content_id, caller = %auth.account_id, "Delete not allowed");
            ApiResponse::forbidden(
                "NOT_ALLOWED",
                "Only the uploader or an operator may delete this",
            )
        }
        Err(e) => {
            error!(content_id = %content_id, error = %e, "Delete failed");
            ApiResponse::internal_error()
        }
    }
}
