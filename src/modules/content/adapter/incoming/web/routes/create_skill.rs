use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::WriteContentError;
use crate::modules::content::application::ports::outgoing::NewSkill;
use crate::shared::api::{ApiResponse, CreatedId};
use crate::AppState;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: String,
    /// 1 to 5
    pub proficiency_level: i32,
    #[serde(default = "default_true")]
    pub is_technical: bool,
}

impl From<CreateSkillRequest> for NewSkill {
    fn from(req: CreateSkillRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            proficiency_level: req.proficiency_level,
            is_technical: req.is_technical,
        }
    }
}

/// Add a skill
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "content",
    request_body = CreateSkillRequest,
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<CreatedId>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .create_skill
        .execute(req.into_inner().into())
        .await
    {
        Ok(id) => ApiResponse::created(CreatedId { id }),

        Err(WriteContentError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(WriteContentError::RepositoryError(msg)) => {
            error!("Repository error creating skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
