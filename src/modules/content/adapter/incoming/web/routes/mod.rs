mod create_experience;
mod create_project;
mod create_skill;
mod get_experience;
mod get_personal_info;
mod get_projects;
mod get_skills;
mod init_db;
mod update_personal_info;

pub use create_experience::*;
pub use create_project::*;
pub use create_skill::*;
pub use get_experience::*;
pub use get_personal_info::*;
pub use get_projects::*;
pub use get_skills::*;
pub use init_db::*;
pub use update_personal_info::*;
