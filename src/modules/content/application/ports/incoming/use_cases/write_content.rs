use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, NewExperience, NewProject, NewSkill, PersonalInfoData,
};
use crate::modules::content::domain::PersonalInfo;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteContentError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for WriteContentError {
    fn from(err: ContentRepositoryError) -> Self {
        match err {
            ContentRepositoryError::DatabaseError(msg) => WriteContentError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdatePersonalInfoUseCase: Send + Sync {
    async fn execute(&self, data: PersonalInfoData) -> Result<PersonalInfo, WriteContentError>;
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, data: NewExperience) -> Result<i32, WriteContentError>;
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: NewProject) -> Result<i32, WriteContentError>;
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: NewSkill) -> Result<i32, WriteContentError>;
}
