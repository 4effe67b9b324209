use actix_web::{get, patch, web, Responder};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::accounts::application::domain::entities::{Profile, Subject};
use crate::accounts::application::ports::outgoing::ProfileChanges;
use crate::accounts::application::use_cases::fetch_profile::FetchProfileError;
use crate::accounts::application::use_cases::update_profile::UpdateProfileError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub account_id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[schema(example = "teacher")]
    pub role: String,
    #[schema(example = "mathematics")]
    pub subject: Option<String>,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub picture_path: Option<String>,
    pub is_verified: bool,
}

impl ProfileResponse {
    fn from_parts(username: String, email: String, full_name: String, profile: Profile) -> Self {
        Self {
            account_id: profile.account_id.to_string(),
            username,
            email,
            full_name,
            role: profile.role.as_str().to_string(),
            subject: profile.subject.map(|s| s.as_str().to_string()),
            bio: profile.bio,
            phone_number: profile.phone_number,
            location: profile.location,
            picture_path: profile.picture_path,
            is_verified: profile.is_verified,
        }
    }
}

/// Fetch the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile found", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(
    auth: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile.execute(auth.account_id).await {
        Ok(view) => {
            let full_name = view.account.full_name();
            ApiResponse::success(ProfileResponse::from_parts(
                view.account.username,
                view.account.email,
                full_name,
                view.profile,
            ))
        }
        Err(FetchProfileError::AccountNotFound) => {
            warn!(account_id = %auth.account_id, "Profile not found");
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(e) => {
            error!(account_id = %auth.account_id, error = %e, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}

// Distinguishes "field absent" (outer None) from "field set to null"
// (Some(None)) in PATCH bodies.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// PATCH body for profile updates. Absent fields are left untouched;
/// explicit nulls clear the stored value.
#[derive(Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "mathematics")]
    pub subject: Option<Option<Subject>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub picture_path: Option<Option<String>>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileChanges {
            subject: req.subject,
            bio: req.bio,
            phone_number: req.phone_number,
            location: req.location,
            picture_path: req.picture_path,
        }
    }
}

/// Update the caller's profile
#[utoipa::path(
    patch,
    path = "/api/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/profile")]
pub async fn update_profile_handler(
    auth: AuthenticatedAccount,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .update_profile
        .execute(auth.account_id, req.into_inner().into())
        .await;

    match result {
        Ok(profile) => {
            info!(account_id = %auth.account_id, "Profile updated");
            // Re-read so the response carries the account fields too.
            match data.fetch_profile.execute(auth.account_id).await {
                Ok(view) => {
                    let full_name = view.account.full_name();
                    ApiResponse::success(ProfileResponse::from_parts(
                        view.account.username,
                        view.account.email,
                        full_name,
                        profile,
                    ))
                }
                Err(e) => {
                    error!(account_id = %auth.account_id, error = %e, "Profile re-read failed");
                    ApiResponse::internal_error()
                }
            }
        }
        Err(UpdateProfileError::ProfileNotFound) => {
            warn!(account_id = %auth.account_id, "Profile not found");
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(UpdateProfileError::TeacherNeedsSubject) => {
            warn!(account_id = %auth.account_id, "Teacher update without subject");
            ApiResponse::bad_request(
                "TEACHER_NEEDS_SUBJECT",
                "Teachers must have a subject specialization",
            )
        }
        Err(e) => {
            error!(account_id = %auth.account_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
