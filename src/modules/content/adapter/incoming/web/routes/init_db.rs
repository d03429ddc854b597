use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::SeedContentError;
use crate::modules::content::application::ports::outgoing::SeedSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reset the store to the built-in content
///
/// Deletes all content and contact messages, then writes the built-in
/// dataset in one transaction. On failure nothing changes.
#[utoipa::path(
    post,
    path = "/api/init-db",
    tag = "content",
    responses(
        (status = 200, description = "Rows written per table", body = inline(SuccessResponse<SeedSummary>)),
        (status = 500, description = "Seeding failed, store unchanged", body = ErrorResponse),
    )
)]
#[post("/api/init-db")]
pub async fn init_db_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.seed.execute().await {
        Ok(summary) => ApiResponse::success(summary),

        Err(SeedContentError::SeedFailed(msg)) => {
            error!("Database initialization failed: {}", msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "SEED_FAILED",
                "Database initialization failed",
            )
        }
    }
}
