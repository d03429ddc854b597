use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactInput,
};
use crate::modules::contact::domain::ContactSubmission;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubmitContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Leave a message through the contact form
///
/// The message is stored even if the mail notification fails; `notified`
/// reports whether it went out.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Stored", body = inline(SuccessResponse<ContactSubmission>)),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = SubmitContactInput {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    match data.contact.submit.execute(input).await {
        Ok(submission) => ApiResponse::created(submission),

        Err(SubmitContactError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SubmitContactError::Storage(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSubmitContactUseCase;

    #[actix_web::test]
    async fn test_submit_contact_success() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactUseCase::success(ContactSubmission {
                id: 3,
                notified: false,
            }))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(submit_contact_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["notified"], false);
    }

    #[actix_web::test]
    async fn test_submit_contact_missing_field() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactUseCase::error(
                SubmitContactError::Validation("name is required".to_string()),
            ))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(submit_contact_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "email": "a@b.com", "message": "hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_submit_contact_storage_error() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactUseCase::error(SubmitContactError::Storage(
                "db down".to_string(),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(submit_contact_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
