use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::contact::adapter::incoming::web::routes::SubmitContactRequest;
use crate::modules::contact::domain::{ContactMessage, ContactSubmission};
use crate::modules::content::adapter::incoming::web::routes::{
    CreateExperienceRequest, CreateProjectRequest, CreateSkillRequest,
    UpdatePersonalInfoRequest,
};
use crate::modules::content::application::ports::outgoing::SeedSummary;
use crate::modules::content::domain::{Experience, PersonalInfo, Project, Skill, SkillGroup};
use crate::modules::settings::application::PublicSettings;
use crate::shared::api::CreatedId;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content, contact form and site configuration for a personal portfolio"
    ),
    paths(
        // Content
        crate::modules::content::adapter::incoming::web::routes::get_personal_info_handler,
        crate::modules::content::adapter::incoming::web::routes::update_personal_info_handler,
        crate::modules::content::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::content::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::content::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::content::adapter::incoming::web::routes::create_project_handler,
        crate::modules::content::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::content::adapter::incoming::web::routes::get_grouped_skills_handler,
        crate::modules::content::adapter::incoming::web::routes::create_skill_handler,
        crate::modules::content::adapter::incoming::web::routes::init_db_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::list_contact_messages_handler,

        // Config
        crate::modules::settings::adapter::incoming::web::routes::get_config_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            CreatedId,

            PersonalInfo,
            Experience,
            Project,
            Skill,
            SkillGroup,
            SeedSummary,
            UpdatePersonalInfoRequest,
            CreateExperienceRequest,
            CreateProjectRequest,
            CreateSkillRequest,

            ContactMessage,
            ContactSubmission,
            SubmitContactRequest,

            PublicSettings
        )
    ),
    tags(
        (name = "content", description = "Portfolio content: personal info, experience, projects, skills"),
        (name = "contact", description = "Contact form submissions"),
        (name = "config", description = "Public site configuration"),
    )
)]
pub struct ApiDoc;
