use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::accounts::application::domain::entities::{Profile, Role};
use crate::accounts::application::use_cases::moderate_profile::ModerateProfileError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetRoleRequest {
    /// New role for the target account
    #[schema(value_type = String, example = "teacher")]
    pub role: Role,
}

#[derive(Serialize, ToSchema)]
pub struct ModeratedProfile {
    pub account_id: String,
    #[schema(example = "teacher")]
    pub role: String,
    pub is_verified: bool,
}

impl From<Profile> for ModeratedProfile {
    fn from(profile: Profile) -> Self {
        Self {
            account_id: profile.account_id.to_string(),
            role: profile.role.as_str().to_string(),
            is_verified: profile.is_verified,
        }
    }
}

fn map_moderation_error(err: ModerateProfileError, target: &str) -> HttpResponse {
    match &err {
        ModerateProfileError::AdminOnly => {
            warn!(target = %target, "Moderation attempted by non-operator");
            ApiResponse::forbidden("ADMIN_ONLY", "Only operators may perform this action")
        }
        ModerateProfileError::ProfileNotFound => {
            warn!(target = %target, "Moderation target not found");
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        ModerateProfileError::NotATeacher => {
            warn!(target = %target, "Verification of a non-teacher rejected");
            ApiResponse::bad_request("NOT_A_TEACHER", "Only teachers can be verified")
        }
        other => {
            error!(target = %target, error = %other, "Moderation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Change an account's platform role (operator only)
#[utoipa::path(
    post,
    path = "/api/accounts/{account_id}/role",
    tag = "moderation",
    security(("bearer_auth" = [])),
    params(("account_id" = Uuid, Path, description = "Target account id")),
    request_body = SetRoleRequest,
    responses(
        (status = 200, description = "Role changed", body = inline(SuccessResponse<ModeratedProfile>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an operator", body = ErrorResponse),
        (status = 404, description = "Target not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/{account_id}/role")]
pub async fn set_role_handler(
    auth: AuthenticatedAccount,
    path: web::Path<uuid::Uuid>,
    req: web::Json<SetRoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();
    let role = req.into_inner().role;

    match data.set_role.execute(auth.account_id, target_id, role).await {
        Ok(profile) => {
            info!(target = %target_id, role = role.as_str(), "Role changed");
            ApiResponse::success(ModeratedProfile::from(profile))
        }
        Err(e) => map_moderation_error(e, &target_id.to_string()),
    }
}

/// Mark a teacher account as verified (operator only)
///
/// Takes effect immediately: the upload gate reads the profile row, not
/// the caller's token, so no re-login is needed.
#[utoipa::path(
    post,
    path = "/api/accounts/{account_id}/verify",
    tag = "moderation",
    security(("bearer_auth" = [])),
    params(("account_id" = Uuid, Path, description = "Target account id")),
    responses(
        (status = 200, description = "Teacher verified", body = inline(SuccessResponse<ModeratedProfile>)),
        (status = 400, description = "Target is not a teacher", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an operator", body = ErrorResponse),
        (status = 404, description = "Target not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/{account_id}/verify")]
pub async fn verify_teacher_handler(
    auth: AuthenticatedAccount,
    path: web::Path<uuid::Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();

    match data
        .verify_teacher
        .execute(auth.account_id, target_id)
        .await
    {
        Ok(profile) => {
            info!(target = %target_id, "Teacher verified");
            ApiResponse::success(ModeratedProfile::from(profile))
        }
        Err(e) => map_moderation_error(e, &target_id.to_string()),
    }
}
