pub mod content_query_postgres;
pub mod content_repository_postgres;
pub mod content_seeder_postgres;
pub mod sea_orm_entity;

pub use content_query_postgres::ContentQueryPostgres;
pub use content_repository_postgres::ContentRepositoryPostgres;
pub use content_seeder_postgres::ContentSeederPostgres;
