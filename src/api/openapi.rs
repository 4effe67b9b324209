use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::accounts::adapter::incoming::web::routes::{
    LoginRequest, LoginResponse, ModeratedProfile, ProfileResponse, RegisterRequest,
    RegisterResponse, RegisteredAccount, SetRoleRequest, UpdateProfileRequest,
};
use crate::ads::adapter::incoming::web::routes::{AdResponse, CreateAdRequest, UpdateAdRequest};
use crate::content::adapter::incoming::web::routes::{ContentItemResponse, UploadYoutubeRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EduRise API",
        version = "1.0.0",
        description = "API documentation for the EduRise educational platform",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::accounts::adapter::incoming::web::routes::register_handler,
        crate::accounts::adapter::incoming::web::routes::login_handler,

        // Profile endpoints
        crate::accounts::adapter::incoming::web::routes::get_profile_handler,
        crate::accounts::adapter::incoming::web::routes::update_profile_handler,

        // Moderation endpoints
        crate::accounts::adapter::incoming::web::routes::set_role_handler,
        crate::accounts::adapter::incoming::web::routes::verify_teacher_handler,

        // Content endpoints
        crate::content::adapter::incoming::web::routes::upload_youtube_handler,
        crate::content::adapter::incoming::web::routes::upload_file_handler,
        crate::content::adapter::incoming::web::routes::set_cover_image_handler,
        crate::content::adapter::incoming::web::routes::list_content_handler,
        crate::content::adapter::incoming::web::routes::search_content_handler,
        crate::content::adapter::incoming::web::routes::view_content_handler,
        crate::content::adapter::incoming::web::routes::download_content_handler,
        crate::content::adapter::incoming::web::routes::delete_content_handler,

        // Ad endpoints
        crate::ads::adapter::incoming::web::routes::active_ads_handler,
        crate::ads::adapter::incoming::web::routes::create_ad_handler,
        crate::ads::adapter::incoming::web::routes::update_ad_handler,
        crate::ads::adapter::incoming::web::routes::delete_ad_handler,
        crate::ads::adapter::incoming::web::routes::list_ads_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterResponse>,
            ErrorResponse,
            ErrorDetail,

            // Account DTOs
            RegisterRequest,
            RegisterResponse,
            RegisteredAccount,
            LoginRequest,
            LoginResponse,
            ProfileResponse,
            UpdateProfileRequest,
            SetRoleRequest,
            ModeratedProfile,

            // Content DTOs
            ContentItemResponse,
            UploadYoutubeRequest,

            // Ad DTOs
            AdResponse,
            CreateAdRequest,
            UpdateAdRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "profile", description = "Profile self-service endpoints"),
        (name = "moderation", description = "Admin moderation endpoints"),
        (name = "content", description = "Educational content endpoints"),
        (name = "ads", description = "Advertisement endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}
