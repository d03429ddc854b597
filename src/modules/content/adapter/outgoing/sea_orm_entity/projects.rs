use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::application::fallback::seeded_created_at;
use crate::modules::content::domain::{decode_string_list, encode_string_list, Project};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    /// JSON array text
    pub technologies: Option<String>,
    pub project_url: String,
    pub github_url: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Project {
        Project {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: decode_string_list(self.technologies.as_deref()),
            project_url: self.project_url.clone(),
            github_url: self.github_url.clone(),
            image_url: self.image_url.clone(),
            featured: self.featured,
        }
    }
}

/// Seeding form: keeps the id and uses the deterministic seed timestamp.
impl From<&Project> for ActiveModel {
    fn from(project: &Project) -> Self {
        Self {
            id: Set(project.id),
            title: Set(project.title.clone()),
            description: Set(project.description.clone()),
            technologies: Set(Some(encode_string_list(&project.technologies))),
            project_url: Set(project.project_url.clone()),
            github_url: Set(project.github_url.clone()),
            image_url: Set(project.image_url.clone()),
            featured: Set(project.featured),
            created_at: Set(seeded_created_at(project.id).fixed_offset()),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
