use async_trait::async_trait;

use crate::modules::content::domain::PersonalInfo;

use super::ListContentError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPersonalInfoError {
    #[error("Personal info not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ListContentError> for GetPersonalInfoError {
    fn from(err: ListContentError) -> Self {
        match err {
            ListContentError::QueryFailed(msg) => GetPersonalInfoError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetPersonalInfoUseCase: Send + Sync {
    async fn execute(&self) -> Result<PersonalInfo, GetPersonalInfoError>;
}
