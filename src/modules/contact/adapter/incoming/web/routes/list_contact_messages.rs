use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::ports::incoming::use_cases::ListContactMessagesError;
use crate::modules::contact::domain::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Contact messages", body = inline(SuccessResponse<Vec<ContactMessage>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn list_contact_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.list_messages.execute().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(ListContactMessagesError::RepositoryError(msg)) => {
            error!("Failed to list contact messages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubListContactMessagesUseCase;

    #[actix_web::test]
    async fn test_list_contact_messages_success() {
        let message = ContactMessage {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            is_read: false,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        };
        let app_state = TestAppStateBuilder::default()
            .with_list_contact_messages(StubListContactMessagesUseCase::success(vec![message]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_contact_messages_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Ada");
        assert_eq!(body["data"][0]["isRead"], false);
        assert_eq!(body["data"][0]["createdAt"], "2024-03-01T09:00:00Z");
    }

    #[actix_web::test]
    async fn test_list_contact_messages_error() {
        let app_state = TestAppStateBuilder::default()
            .with_list_contact_messages(StubListContactMessagesUseCase::error("db down"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_contact_messages_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
