use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactRepositoryError;
use crate::modules::contact::domain::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ContactRepositoryError> for SubmitContactError {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::DatabaseError(msg) => SubmitContactError::Storage(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        input: SubmitContactInput,
    ) -> Result<ContactSubmission, SubmitContactError>;
}
