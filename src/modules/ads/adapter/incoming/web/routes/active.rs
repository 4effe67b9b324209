use actix_web::{get, web, Responder};
use std::collections::HashMap;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::AdResponse;

/// Currently active ad per position
///
/// Keys are position names; positions without an active ad are absent.
#[utoipa::path(
    get,
    path = "/api/ads/active",
    tag = "ads",
    responses(
        (status = 200, description = "Winning ad per position", body = inline(SuccessResponse<HashMap<String, AdResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/ads/active")]
pub async fn active_ads_handler(data: web::Data<AppState>) -> impl Responder {
    match data.select_ads.execute().await {
        Ok(winners) => {
            let by_position: HashMap<String, AdResponse> = winners
                .into_iter()
                .map(|(position, ad)| (position.as_str().to_string(), AdResponse::from(ad)))
                .collect();
            ApiResponse::success(by_position)
        }
        Err(e) => {
            error!(error = %e, "Ad selection failed");
            ApiResponse::internal_error()
        }
    }
}
