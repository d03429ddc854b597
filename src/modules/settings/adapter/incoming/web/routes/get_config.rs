use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::settings::application::PublicSettings;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get public site configuration
///
/// Returns the non-secret part of the resolved settings. Mail credentials are
/// reduced to a single `smtpConfigured` flag.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "config",
    responses(
        (status = 200, description = "Public configuration", body = inline(SuccessResponse<PublicSettings>)),
    )
)]
#[get("/api/config")]
pub async fn get_config_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(PublicSettings::from(data.settings.as_ref()))
}
