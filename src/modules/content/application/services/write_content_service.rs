use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, CreateProjectUseCase, CreateSkillUseCase, UpdatePersonalInfoUseCase,
    WriteContentError,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, NewExperience, NewProject, NewSkill, PersonalInfoData,
};
use crate::modules::content::domain::PersonalInfo;

fn require(field: &str, value: &str) -> Result<(), WriteContentError> {
    if value.trim().is_empty() {
        return Err(WriteContentError::Validation(format!("{field} is required")));
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Validates content writes and hands them to the repository.
///
/// List fields arrive already normalized by the request layer.
pub struct WriteContentService<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> WriteContentService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdatePersonalInfoUseCase for WriteContentService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, data: PersonalInfoData) -> Result<PersonalInfo, WriteContentError> {
        require("fullName", &data.full_name)?;

        Ok(self.repository.upsert_personal_info(data).await?)
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for WriteContentService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, data: NewExperience) -> Result<i32, WriteContentError> {
        require("jobTitle", &data.job_title)?;
        require("company", &data.company)?;

        Ok(self.repository.create_experience(data).await?)
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for WriteContentService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, data: NewProject) -> Result<i32, WriteContentError> {
        require("title", &data.title)?;

        Ok(self.repository.create_project(data).await?)
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for WriteContentService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, data: NewSkill) -> Result<i32, WriteContentError> {
        require("name", &data.name)?;
        require("category", &data.category)?;
        if !(1..=5).contains(&data.proficiency_level) {
            return Err(WriteContentError::Validation(
                "proficiencyLevel must be between 1 and 5".to_string(),
            ));
        }

        Ok(self.repository.create_skill(data).await?)
    }
}
