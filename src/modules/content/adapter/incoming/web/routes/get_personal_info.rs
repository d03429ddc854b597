use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::GetPersonalInfoError;
use crate::modules::content::domain::PersonalInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get personal info
///
/// Stored record, or the built-in one while the store is empty.
#[utoipa::path(
    get,
    path = "/api/personal-info",
    tag = "content",
    responses(
        (status = 200, description = "Personal info", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 404, description = "No personal info available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/personal-info")]
pub async fn get_personal_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_personal_info.execute().await {
        Ok(info) => ApiResponse::success(info),

        Err(GetPersonalInfoError::NotFound) => {
            ApiResponse::not_found("PERSONAL_INFO_NOT_FOUND", "Personal info not found")
        }

        Err(GetPersonalInfoError::QueryFailed(msg)) => {
            error!("Failed to load personal info: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
