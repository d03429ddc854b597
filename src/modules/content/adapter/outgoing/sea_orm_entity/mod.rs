pub mod experiences;
pub mod personal_info;
pub mod projects;
pub mod skills;
