use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::ListContentError;
use crate::modules::content::domain::{group_skills_by_category, Skill, SkillGroup};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List skills, ordered by category then name
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "content",
    responses(
        (status = 200, description = "Skills", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_skills.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(ListContentError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// List skills grouped by category
#[utoipa::path(
    get,
    path = "/api/skills/grouped",
    tag = "content",
    responses(
        (status = 200, description = "Skill groups", body = inline(SuccessResponse<Vec<SkillGroup>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/skills/grouped")]
pub async fn get_grouped_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_skills.execute().await {
        Ok(skills) => ApiResponse::success(group_skills_by_category(skills)),

        Err(ListContentError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
