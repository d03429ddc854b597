use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::WriteContentError;
use crate::modules::content::application::ports::outgoing::PersonalInfoData;
use crate::modules::content::domain::PersonalInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonalInfoRequest {
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

impl From<UpdatePersonalInfoRequest> for PersonalInfoData {
    fn from(req: UpdatePersonalInfoRequest) -> Self {
        Self {
            full_name: req.full_name,
            title: req.title,
            bio: req.bio,
            location: req.location,
            email: req.email,
            phone: req.phone,
            github_url: req.github_url,
            linkedin_url: req.linkedin_url,
        }
    }
}

/// Replace personal info
#[utoipa::path(
    put,
    path = "/api/personal-info",
    tag = "content",
    request_body = UpdatePersonalInfoRequest,
    responses(
        (status = 200, description = "Stored personal info", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/personal-info")]
pub async fn update_personal_info_handler(
    req: web::Json<UpdatePersonalInfoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .update_personal_info
        .execute(req.into_inner().into())
        .await
    {
        Ok(info) => ApiResponse::success(info),

        Err(WriteContentError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(WriteContentError::RepositoryError(msg)) => {
            error!("Repository error updating personal info: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
