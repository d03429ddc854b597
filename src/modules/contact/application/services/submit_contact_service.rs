use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactRepository, NewContactMessage,
};
use crate::modules::contact::domain::ContactSubmission;

fn require(field: &str, value: &str) -> Result<String, SubmitContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SubmitContactError::Validation(format!(
            "{field} is required"
        )));
    }
    Ok(trimmed.to_string())
}

/// Persist first, then notify.
///
/// The stored message is the result; the notification only decides the
/// `notified` flag. Without a notifier (mail not configured) nothing is sent.
pub struct SubmitContactService<R>
where
    R: ContactRepository,
{
    repository: R,
    notifier: Option<Arc<dyn ContactNotifier>>,
    send_timeout: Duration,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository,
{
    pub fn new(
        repository: R,
        notifier: Option<Arc<dyn ContactNotifier>>,
        send_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            notifier,
            send_timeout,
        }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        input: SubmitContactInput,
    ) -> Result<ContactSubmission, SubmitContactError> {
        let new_message = NewContactMessage {
            name: require("name", &input.name)?,
            email: require("email", &input.email)?,
            message: require("message", &input.message)?,
        };

        let stored = self.repository.create(new_message).await?;
        info!(message_id = stored.id, "Contact message stored");

        let Some(notifier) = &self.notifier else {
            return Ok(ContactSubmission {
                id: stored.id,
                notified: false,
            });
        };

        let notified = match tokio::time::timeout(self.send_timeout, notifier.notify(&stored)).await
        {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                warn!(message_id = stored.id, error = %err, "Contact notification failed");
                false
            }
            Err(_) => {
                warn!(
                    message_id = stored.id,
                    timeout_secs = self.send_timeout.as_secs(),
                    "Contact notification timed out"
                );
                false
            }
        };

        Ok(ContactSubmission {
            id: stored.id,
            notified,
        })
    }
}
