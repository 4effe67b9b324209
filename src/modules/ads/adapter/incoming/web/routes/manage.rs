use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::ads::application::domain::entities::AdPosition;
use crate::ads::application::ports::outgoing::AdChanges;
use crate::ads::application::use_cases::manage_ads::{CreateAdInput, ManageAdsError};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::AdResponse;

#[derive(Deserialize, ToSchema)]
pub struct CreateAdRequest {
    #[schema(example = "After-school tutoring")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_path: Option<String>,
    #[schema(example = "https://example.com/tutoring")]
    pub target_url: String,
    /// Defaults to "Learn More"
    pub cta_text: Option<String>,
    #[schema(value_type = String, example = "sidebar")]
    pub position: AdPosition,
    #[serde(default)]
    pub show_timer: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// PATCH body; absent fields stay untouched, explicit nulls clear the
/// nullable ones.
#[derive(Default, Deserialize, ToSchema)]
pub struct UpdateAdRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_path: Option<Option<String>>,
    pub target_url: Option<String>,
    pub cta_text: Option<String>,
    #[schema(value_type = Option<String>, example = "bottom")]
    pub position: Option<AdPosition>,
    pub is_active: Option<bool>,
    pub show_timer: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub end_date: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateAdRequest> for AdChanges {
    fn from(req: UpdateAdRequest) -> Self {
        AdChanges {
            title: req.title,
            description: req.description,
            image_path: req.image_path,
            target_url: req.target_url,
            cta_text: req.cta_text,
            position: req.position,
            is_active: req.is_active,
            show_timer: req.show_timer,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

fn map_manage_error(err: ManageAdsError) -> HttpResponse {
    match &err {
        ManageAdsError::AdminOnly => {
            warn!("Ad management attempted by non-operator");
            ApiResponse::forbidden("ADMIN_ONLY", "Only operators may manage ads")
        }
        ManageAdsError::AdNotFound => ApiResponse::not_found("AD_NOT_FOUND", "Ad not found"),
        ManageAdsError::InvalidInput(msg) => ApiResponse::bad_request("INVALID_INPUT", msg),
        other => {
            error!(error = %other, "Ad management failed");
            ApiResponse::internal_error()
        }
    }
}

/// Create an ad (operator only)
#[utoipa::path(
    post,
    path = "/api/ads",
    tag = "ads",
    security(("bearer_auth" = [])),
    request_body = CreateAdRequest,
    responses(
        (status = 201, description = "Ad created", body = inline(SuccessResponse<AdResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an operator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/ads")]
pub async fn create_ad_handler(
    auth: AuthenticatedAccount,
    req: web::Json<CreateAdRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let result = data
        .create_ad
        .execute(
            auth.account_id,
            CreateAdInput {
                title: req.title,
                description: req.description,
                image_path: req.image_path,
                target_url: req.target_url,
                cta_text: req.cta_text,
                position: req.position,
                show_timer: req.show_timer,
                start_date: req.start_date,
                end_date: req.end_date,
            },
        )
        .await;

    match result {
        Ok(ad) => ApiResponse::created(AdResponse::from(ad)),
        Err(e) => map_manage_error(e),
    }
}

/// Update an ad (operator only)
#[utoipa::path(
    patch,
    path = "/api/ads/{ad_id}",
    tag = "ads",
    security(("bearer_auth" = [])),
    params(("ad_id" = Uuid, Path, description = "Ad id")),
    request_body = UpdateAdRequest,
    responses(
        (status = 200, description = "Ad updated", body = inline(SuccessResponse<AdResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an operator", body = ErrorResponse),
        (status = 404, description = "No such ad", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/ads/{ad_id}")]
pub async fn update_ad_handler(
    auth: AuthenticatedAccount,
    path: web::Path<uuid::Uuid>,
    req: web::Json<UpdateAdRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .update_ad
        .execute(auth.account_id, path.into_inner(), req.into_inner().into())
        .await;

    match result {
        Ok(ad) => ApiResponse::success(AdResponse::from(ad)),
        Err(e) => map_manage_error(e),
    }
}

/// Delete an ad (operator only)
#[utoipa::path(
    delete,
    path = "/api/ads/{ad_id}",
    tag = "ads",
    security(("bearer_auth" = [])),
    params(("ad_id" = Uuid, Path, description = "Ad id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an operator", body = ErrorResponse),
        (status = 404, description = "No such ad", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/ads/{ad_id}")]
pub async fn delete_ad_handler(
    auth: AuthenticatedAccount,
    path: web::Path<uuid::Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_ad
        .execute(auth.account_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_manage_error(e),
    }
}

/// Full ad inventory (operator only)
#[utoipa::path(
    get,
    path = "/api/ads",
    tag = "ads",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All ads, newest first", body = inline(SuccessResponse<Vec<AdResponse>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an operator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/ads")]
pub async fn list_ads_handler(
    auth: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_ads.execute(auth.account_id).await {
        Ok(ads) => {
            ApiResponse::success(ads.into_iter().map(AdResponse::from).collect::<Vec<_>>())
        }
        Err(e) => map_manage_error(e),
    }
}
