use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::accounts::application::use_cases::login_account::LoginAccountError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for login
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub account_id: String,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account deactivated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    info!(username = %req.username, "Login attempt");

    let result = data
        .login_account
        .execute(req.username.clone(), req.password)
        .await;

    match result {
        Ok(out) => {
            info!(account_id = %out.account_id, "Login successful");
            ApiResponse::success(LoginResponse {
                account_id: out.account_id.to_string(),
                username: out.username,
                access_token: out.access_token,
                refresh_token: out.refresh_token,
            })
        }
        Err(LoginAccountError::InvalidCredentials) => {
            warn!(username = %req.username, "Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(LoginAccountError::AccountInactive) => {
            warn!(username = %req.username, "Login on deactivated account");
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "This account has been deactivated")
        }
        Err(e) => {
            error!(username = %req.username, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
