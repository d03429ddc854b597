use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::WriteContentError;
use crate::modules::content::application::ports::outgoing::NewExperience;
use crate::modules::content::domain::deserialize_string_list;
use crate::shared::api::{ApiResponse, CreatedId};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub job_title: String,
    pub company: String,
    /// `YYYY-MM-DD` or `YYYY-MM`
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
    /// List of strings, or the same list as JSON text
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub is_current: bool,
}

/// Blank means no date; a bare month means its first day.
fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .map(Some)
        .map_err(|_| format!("{field} must be YYYY-MM-DD or YYYY-MM"))
}

impl TryFrom<CreateExperienceRequest> for NewExperience {
    type Error = String;

    fn try_from(req: CreateExperienceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            start_date: parse_date("startDate", req.start_date.as_deref())?,
            end_date: parse_date("endDate", req.end_date.as_deref())?,
            job_title: req.job_title,
            company: req.company,
            description: req.description,
            achievements: req.achievements,
            is_current: req.is_current,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Add a work experience entry
#[utoipa::path(
    post,
    path = "/api/experience",
    tag = "content",
    request_body = CreateExperienceRequest,
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<CreatedId>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/experience")]
pub async fn create_experience_handler(
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new_experience = match NewExperience::try_from(req.into_inner()) {
        Ok(exp) => exp,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", &msg),
    };

    match data.content.create_experience.execute(new_experience).await {
        Ok(id) => ApiResponse::created(CreatedId { id }),

        Err(WriteContentError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(WriteContentError::RepositoryError(msg)) => {
            error!("Repository error creating experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
