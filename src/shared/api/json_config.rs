use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// JSON bodies here are small metadata payloads; uploads travel as raw
/// bytes on their own endpoints, so 64 KiB is plenty.
const JSON_BODY_LIMIT: usize = 64 * 1024;

/// Deserialization failures come back in the standard error envelope
/// instead of actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
