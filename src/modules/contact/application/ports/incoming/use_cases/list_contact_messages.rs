use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactRepositoryError;
use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactRepositoryError> for ListContactMessagesError {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::DatabaseError(msg) => {
                ListContactMessagesError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError>;
}
