pub mod content_query;
pub mod content_repository;
pub mod content_seeder;

pub use content_query::{ContentQuery, ContentQueryError};
pub use content_repository::{
    ContentRepository, ContentRepositoryError, NewExperience, NewProject, NewSkill,
    PersonalInfoData,
};
pub use content_seeder::{ContentSeeder, ContentSeederError, SeedSummary};
