use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, CreateProjectUseCase, CreateSkillUseCase, GetPersonalInfoUseCase,
    ListContentUseCase, SeedContentUseCase, UpdatePersonalInfoUseCase,
};
use crate::modules::content::domain::{Experience, Project, Skill};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_personal_info: Arc<dyn GetPersonalInfoUseCase + Send + Sync>,
    pub update_personal_info: Arc<dyn UpdatePersonalInfoUseCase + Send + Sync>,
    pub list_experiences: Arc<dyn ListContentUseCase<Experience> + Send + Sync>,
    pub create_experience: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub list_projects: Arc<dyn ListContentUseCase<Project> + Send + Sync>,
    pub create_project: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub list_skills: Arc<dyn ListContentUseCase<Skill> + Send + Sync>,
    pub create_skill: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub seed: Arc<dyn SeedContentUseCase + Send + Sync>,
}
