use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Tells the site owner about a stored contact message.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotificationError>;
}
