use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::content::domain::PersonalInfo;

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfoData {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub github_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub job_title: String,
    pub company: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub achievements: Vec<String>,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub project_url: String,
    pub github_url: String,
    pub image_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub proficiency_level: i32,
    pub is_technical: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Insert or replace the single personal-info row.
    async fn upsert_personal_info(
        &self,
        data: PersonalInfoData,
    ) -> Result<PersonalInfo, ContentRepositoryError>;

    async fn create_experience(&self, data: NewExperience) -> Result<i32, ContentRepositoryError>;

    async fn create_project(&self, data: NewProject) -> Result<i32, ContentRepositoryError>;

    async fn create_skill(&self, data: NewSkill) -> Result<i32, ContentRepositoryError>;
}
