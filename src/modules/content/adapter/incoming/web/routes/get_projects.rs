use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::ListContentError;
use crate::modules::content::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects
///
/// Featured projects first, then newest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_projects.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(ListContentError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
