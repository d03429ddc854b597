mod get_personal_info;
mod list_content;
mod seed_content;
mod write_content;

pub use get_personal_info::{GetPersonalInfoError, GetPersonalInfoUseCase};
pub use list_content::{ListContentError, ListContentUseCase};
pub use seed_content::{SeedContentError, SeedContentUseCase};
pub use write_content::{
    CreateExperienceUseCase, CreateProjectUseCase, CreateSkillUseCase, UpdatePersonalInfoUseCase,
    WriteContentError,
};
