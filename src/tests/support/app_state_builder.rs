use std::sync::Arc;

use actix_web::web;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ContactUseCases;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, CreateProjectUseCase, CreateSkillUseCase, GetPersonalInfoUseCase,
    ListContentUseCase, SeedContentUseCase, UpdatePersonalInfoUseCase,
};
use crate::modules::content::application::ports::outgoing::SeedSummary;
use crate::modules::content::application::ContentUseCases;
use crate::modules::content::domain::{Experience, Project, Skill};
use crate::modules::settings::application::Settings;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` of harmless stubs; tests swap in the use case under
/// test with the matching `with_*` method.
pub struct TestAppStateBuilder {
    settings: Settings,
    content: ContentUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let write = Arc::new(StubWriteContentUseCase::created(1));

        Self {
            settings: Settings::default(),
            content: ContentUseCases {
                get_personal_info: Arc::new(StubGetPersonalInfoUseCase::default_record()),
                update_personal_info: write.clone(),
                list_experiences: Arc::new(StubListContentUseCase::<Experience>::success(vec![])),
                create_experience: write.clone(),
                list_projects: Arc::new(StubListContentUseCase::<Project>::success(vec![])),
                create_project: write.clone(),
                list_skills: Arc::new(StubListContentUseCase::<Skill>::success(vec![])),
                create_skill: write,
                seed: Arc::new(StubSeedContentUseCase::success(SeedSummary::default())),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase::error(SubmitContactError::Storage(
                    "not used in this test".to_string(),
                ))),
                list_messages: Arc::new(StubListContactMessagesUseCase::success(vec![])),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_get_personal_info(
        mut self,
        uc: impl GetPersonalInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.get_personal_info = Arc::new(uc);
        self
    }

    pub fn with_update_personal_info(
        mut self,
        uc: impl UpdatePersonalInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.update_personal_info = Arc::new(uc);
        self
    }

    pub fn with_list_experiences(
        mut self,
        uc: impl ListContentUseCase<Experience> + Send + Sync + 'static,
    ) -> Self {
        self.content.list_experiences = Arc::new(uc);
        self
    }

    pub fn with_create_experience(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.create_experience = Arc::new(uc);
        self
    }

    pub fn with_list_projects(
        mut self,
        uc: impl ListContentUseCase<Project> + Send + Sync + 'static,
    ) -> Self {
        self.content.list_projects = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.create_project = Arc::new(uc);
        self
    }

    pub fn with_list_skills(
        mut self,
        uc: impl ListContentUseCase<Skill> + Send + Sync + 'static,
    ) -> Self {
        self.content.list_skills = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + Send + Sync + 'static) -> Self {
        self.content.create_skill = Arc::new(uc);
        self
    }

    pub fn with_seed(mut self, uc: impl SeedContentUseCase + Send + Sync + 'static) -> Self {
        self.content.seed = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact_messages(
        mut self,
        uc: impl ListContactMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list_messages = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            settings: Arc::new(self.settings),
            content: self.content,
            contact: self.contact,
        })
    }
}
