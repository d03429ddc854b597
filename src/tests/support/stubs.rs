use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase, SubmitContactError, SubmitContactInput,
    SubmitContactUseCase,
};
use crate::modules::contact::domain::{ContactMessage, ContactSubmission};
use crate::modules::content::application::fallback::fallback_personal_info;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, CreateProjectUseCase, CreateSkillUseCase, GetPersonalInfoError,
    GetPersonalInfoUseCase, ListContentError, ListContentUseCase, SeedContentError,
    SeedContentUseCase, UpdatePersonalInfoUseCase, WriteContentError,
};
use crate::modules::content::application::ports::outgoing::{
    NewExperience, NewProject, NewSkill, PersonalInfoData, SeedSummary,
};
use crate::modules::content::domain::PersonalInfo;
use crate::modules::settings::application::Settings;

//
// ──────────────────────────────────────────────────────────
// Content reads
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubListContentUseCase<R> {
    result: Result<Vec<R>, ListContentError>,
}

impl<R> StubListContentUseCase<R> {
    pub fn success(data: Vec<R>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(ListContentError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl<R> ListContentUseCase<R> for StubListContentUseCase<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn execute(&self) -> Result<Vec<R>, ListContentError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetPersonalInfoUseCase {
    result: Result<PersonalInfo, GetPersonalInfoError>,
}

impl StubGetPersonalInfoUseCase {
    pub fn success(info: PersonalInfo) -> Self {
        Self { result: Ok(info) }
    }

    pub fn default_record() -> Self {
        Self::success(fallback_personal_info(&Settings::default()))
    }

    pub fn error(err: GetPersonalInfoError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetPersonalInfoUseCase for StubGetPersonalInfoUseCase {
    async fn execute(&self) -> Result<PersonalInfo, GetPersonalInfoError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Content writes
// ──────────────────────────────────────────────────────────
//

/// Answers every write with the same id or error.
#[derive(Clone)]
pub struct StubWriteContentUseCase {
    result: Result<i32, WriteContentError>,
}

impl StubWriteContentUseCase {
    pub fn created(id: i32) -> Self {
        Self { result: Ok(id) }
    }

    pub fn error(err: WriteContentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdatePersonalInfoUseCase for StubWriteContentUseCase {
    async fn execute(&self, _data: PersonalInfoData) -> Result<PersonalInfo, WriteContentError> {
        self.result
            .clone()
            .map(|_| fallback_personal_info(&Settings::default()))
    }
}

#[async_trait]
impl CreateExperienceUseCase for StubWriteContentUseCase {
    async fn execute(&self, _data: NewExperience) -> Result<i32, WriteContentError> {
        self.result.clone()
    }
}

#[async_trait]
impl CreateProjectUseCase for StubWriteContentUseCase {
    async fn execute(&self, _data: NewProject) -> Result<i32, WriteContentError> {
        self.result.clone()
    }
}

#[async_trait]
impl CreateSkillUseCase for StubWriteContentUseCase {
    async fn execute(&self, _data: NewSkill) -> Result<i32, WriteContentError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubSeedContentUseCase {
    result: Result<SeedSummary, SeedContentError>,
}

impl StubSeedContentUseCase {
    pub fn success(summary: SeedSummary) -> Self {
        Self {
            result: Ok(summary),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(SeedContentError::SeedFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl SeedContentUseCase for StubSeedContentUseCase {
    async fn execute(&self) -> Result<SeedSummary, SeedContentError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubSubmitContactUseCase {
    result: Result<ContactSubmission, SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn success(submission: ContactSubmission) -> Self {
        Self {
            result: Ok(submission),
        }
    }

    pub fn error(err: SubmitContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _input: SubmitContactInput,
    ) -> Result<ContactSubmission, SubmitContactError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListContactMessagesUseCase {
    result: Result<Vec<ContactMessage>, ListContactMessagesError>,
}

impl StubListContactMessagesUseCase {
    pub fn success(messages: Vec<ContactMessage>) -> Self {
        Self {
            result: Ok(messages),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(ListContactMessagesError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListContactMessagesUseCase for StubListContactMessagesUseCase {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        self.result.clone()
    }
}
