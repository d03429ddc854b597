use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::WriteContentError;
use crate::modules::content::application::ports::outgoing::NewProject;
use crate::modules::content::domain::deserialize_string_list;
use crate::shared::api::{ApiResponse, CreatedId};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// List of strings, or the same list as JSON text
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub github_url: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            technologies: req.technologies,
            project_url: req.project_url,
            github_url: req.github_url,
            image_url: req.image_url.filter(|url| !url.trim().is_empty()),
            featured: req.featured,
        }
    }
}

/// Add a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "content",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<CreatedId>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .create_project
        .execute(req.into_inner().into())
        .await
    {
        Ok(id) => ApiResponse::created(CreatedId { id }),

        Err(WriteContentError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(WriteContentError::RepositoryError(msg)) => {
            error!("Repository error creating project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::content::application::ports::incoming::use_cases::CreateProjectUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Capturing use case
     * -------------------------------------------------- */

    #[derive(Clone, Default)]
    struct CapturingCreateProject {
        seen: Arc<Mutex<Vec<NewProject>>>,
        fail_with: Option<WriteContentError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for CapturingCreateProject {
        async fn execute(&self, data: NewProject) -> Result<i32, WriteContentError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            let mut seen = self.seen.lock().unwrap();
            seen.push(data);
            Ok(seen.len() as i32)
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_accepts_json_text_technologies() {
        let use_case = CapturingCreateProject::default();
        let app_state = TestAppStateBuilder::default()
            .with_create_project(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "title": "Chat Relay",
                "technologies": "[\"Rust\",\"WebSockets\"]",
                "imageUrl": ""
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 1);

        let seen = use_case.seen.lock().unwrap();
        assert_eq!(seen[0].technologies, vec!["Rust", "WebSockets"]);
        assert_eq!(seen[0].image_url, None);
        assert!(!seen[0].featured);
        assert_eq!(seen[0].project_url, "");
    }

    #[actix_web::test]
    async fn test_create_project_validation_error() {
        let use_case = CapturingCreateProject {
            fail_with: Some(WriteContentError::Validation("title is required".to_string())),
            ..Default::default()
        };
        let app_state = TestAppStateBuilder::default()
            .with_create_project(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({ "title": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "title is required");
    }

    #[actix_web::test]
    async fn test_create_project_malformed_body() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(CapturingCreateProject::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_create_project_repository_error() {
        let use_case = CapturingCreateProject {
            fail_with: Some(WriteContentError::RepositoryError("db down".to_string())),
            ..Default::default()
        };
        let app_state = TestAppStateBuilder::default()
            .with_create_project(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({ "title": "Chat Relay" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
