use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, NewExperience, NewProject, NewSkill,
    PersonalInfoData,
};
use crate::modules::content::domain::{encode_string_list, PersonalInfo, PERSONAL_INFO_ID};

use super::sea_orm_entity::{experiences, personal_info, projects, skills};

fn db_error(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}

#[derive(Debug, Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn upsert_personal_info(
        &self,
        data: PersonalInfoData,
    ) -> Result<PersonalInfo, ContentRepositoryError> {
        let info = PersonalInfo {
            id: PERSONAL_INFO_ID,
            full_name: data.full_name,
            title: data.title,
            bio: data.bio,
            location: data.location,
            email: data.email,
            phone: data.phone,
            github_url: data.github_url,
            linkedin_url: data.linkedin_url,
        };

        personal_info::Entity::insert(personal_info::ActiveModel::from(&info))
            .on_conflict(
                OnConflict::column(personal_info::Column::Id)
                    .update_columns([
                        personal_info::Column::FullName,
                        personal_info::Column::Title,
                        personal_info::Column::Bio,
                        personal_info::Column::Location,
                        personal_info::Column::Email,
                        personal_info::Column::Phone,
                        personal_info::Column::GithubUrl,
                        personal_info::Column::LinkedinUrl,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(info)
    }

    async fn create_experience(&self, data: NewExperience) -> Result<i32, ContentRepositoryError> {
        let model = experiences::ActiveModel {
            id: NotSet,
            job_title: Set(data.job_title),
            company: Set(data.company),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            achievements: Set(Some(encode_string_list(&data.achievements))),
            is_current: Set(data.is_current),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(model.id)
    }

    async fn create_project(&self, data: NewProject) -> Result<i32, ContentRepositoryError> {
        let model = projects::ActiveModel {
            id: NotSet,
            title: Set(data.title),
            description: Set(data.description),
            technologies: Set(Some(encode_string_list(&data.technologies))),
            project_url: Set(data.project_url),
            github_url: Set(data.github_url),
            image_url: Set(data.image_url),
            featured: Set(data.featured),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(model.id)
    }

    async fn create_skill(&self, data: NewSkill) -> Result<i32, ContentRepositoryError> {
        let model = skills::ActiveModel {
            id: NotSet,
            name: Set(data.name),
            category: Set(data.category),
            proficiency_level: Set(data.proficiency_level),
            is_technical: Set(data.is_technical),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(model.id)
    }
}
