use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

/// A validated submission, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, data: NewContactMessage)
        -> Result<ContactMessage, ContactRepositoryError>;

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError>;
}
