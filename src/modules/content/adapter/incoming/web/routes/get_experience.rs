use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::ListContentError;
use crate::modules::content::domain::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List work experience
///
/// Newest first. Entries with `isCurrent` set are ongoing regardless of
/// `endDate`.
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "content",
    responses(
        (status = 200, description = "Experience entries", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_experiences.execute().await {
        Ok(experiences) => ApiResponse::success(experiences),

        Err(ListContentError::QueryFailed(msg)) => {
            error!("Failed to list experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
