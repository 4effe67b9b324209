use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::accounts::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountInput, RegistrationRole,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Roles a visitor can choose at sign-up. There is intentionally no
/// admin variant here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignupRole {
    Student,
    Teacher,
}

impl From<SignupRole> for RegistrationRole {
    fn from(value: SignupRole) -> Self {
        match value {
            SignupRole::Student => RegistrationRole::Student,
            SignupRole::Teacher => RegistrationRole::Teacher,
        }
    }
}

/// Request body for account registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Unique handle
    #[schema(example = "alice")]
    pub username: String,

    /// Email address
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "Alice")]
    pub first_name: String,

    #[schema(example = "Ngugi")]
    pub last_name: String,

    pub password: String,

    /// Must match `password`
    pub password_confirm: String,

    /// Chosen platform role
    pub role: SignupRole,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "Registration successful! Welcome to EduRise.")]
    pub message: String,
    pub account: RegisteredAccount,
    /// Token pair establishing the session
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    #[schema(example = "teacher")]
    pub role: String,
    /// Teachers start unverified; an operator flips this later
    pub is_verified: bool,
}

fn map_register_error(err: RegisterAccountError, username: &str) -> HttpResponse {
    match &err {
        RegisterAccountError::MissingField(msg) => {
            warn!(username = %username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("MISSING_FIELD", msg)
        }
        RegisterAccountError::PasswordMismatch => {
            warn!(username = %username, "Password confirmation mismatch");
            ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match")
        }
        RegisterAccountError::UsernameTaken => {
            warn!(username = %username, "Username already taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }
        RegisterAccountError::EmailTaken => {
            warn!(username = %username, "Email already taken");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already taken")
        }
        other => {
            error!(username = %username, error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Creates the account and its profile extension in one transaction and
/// returns a token pair so the caller is logged in immediately.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, email = %req.email, "Registration attempt");

    let req = req.into_inner();
    let username = req.username.clone();

    let result = data
        .register_account
        .execute(RegisterAccountInput {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
            password_confirm: req.password_confirm,
            role: req.role.into(),
        })
        .await;

    match result {
        Ok(out) => {
            info!(
                account_id = %out.account_id,
                username = %out.username,
                role = out.role.as_str(),
                "Account registered"
            );

            ApiResponse::created(RegisterResponse {
                message: "Registration successful! Welcome to EduRise.".to_string(),
                account: RegisteredAccount {
                    id: out.account_id.to_string(),
                    username: out.username,
                    email: out.email,
                    role: out.role.as_str().to_string(),
                    is_verified: out.is_verified,
                },
                access_token: out.access_token,
                refresh_token: out.refresh_token,
            })
        }
        Err(e) => map_register_error(e, &username),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::domain::entities::Role;
    use crate::accounts::application::use_cases::register_account::{
        IRegisterAccountUseCase, RegisterAccountOutput,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockRegisterSuccess {
        role: Role,
    }

    #[async_trait]
    impl IRegisterAccountUseCase for MockRegisterSuccess {
        async fn execute(
            &self,
            input: RegisterAccountInput,
        ) -> Result<RegisterAccountOutput, RegisterAccountError> {
            Ok(RegisterAccountOutput {
                account_id: Uuid::new_v4(),
                username: input.username,
                email: input.email,
                role: self.role,
                is_verified: false,
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            })
        }
    }

    struct MockRegisterFailure {
        error: fn() -> RegisterAccountError,
    }

    #[async_trait]
    impl IRegisterAccountUseCase for MockRegisterFailure {
        async fn execute(
            &self,
            _: RegisterAccountInput,
        ) -> Result<RegisterAccountOutput, RegisterAccountError> {
            Err((self.error)())
        }
    }

    fn request_body(role: &str) -> serde_json::Value {
        serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "first_name": "Alice",
            "last_name": "Ngugi",
            "password": "SecurePass123!",
            "password_confirm": "SecurePass123!",
            "role": role,
        })
    }

    #[actix_web::test]
    async fn registering_a_teacher_reports_role_and_unverified() {
        let app_state = TestAppStateBuilder::default()
            .with_register_account(MockRegisterSuccess { role: Role::Teacher })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body("teacher"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["account"]["role"], "teacher");
        assert_eq!(body["data"]["account"]["is_verified"], false);
        assert!(body["data"]["access_token"].is_string());
        assert!(body["data"]["refresh_token"].is_string());
    }

    #[actix_web::test]
    async fn password_mismatch_maps_to_400() {
        let app_state = TestAppStateBuilder::default()
            .with_register_account(MockRegisterFailure {
                error: || RegisterAccountError::PasswordMismatch,
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body("student"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PASSWORD_MISMATCH");
    }

    #[actix_web::test]
    async fn taken_username_maps_to_409() {
        let app_state = TestAppStateBuilder::default()
            .with_register_account(MockRegisterFailure {
                error: || RegisterAccountError::UsernameTaken,
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body("student"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
    }

    #[actix_web::test]
    async fn admin_is_not_a_valid_signup_role() {
        let app_state = TestAppStateBuilder::default()
            .with_register_account(MockRegisterSuccess { role: Role::Student })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body("admin"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        // serde rejects the unknown enum variant before the use case runs
        assert_eq!(resp.status(), 400);
    }
}
