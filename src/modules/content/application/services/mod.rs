mod read_through_service;
mod seed_content_service;
mod write_content_service;

pub use read_through_service::{ContentRecord, ReadThroughService};
pub use seed_content_service::SeedContentService;
pub use write_content_service::WriteContentService;
