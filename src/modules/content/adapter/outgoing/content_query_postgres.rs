use async_trait::async_trait;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder};
use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::modules::content::domain::{Experience, PersonalInfo, Project, Skill};

use super::sea_orm_entity::{experiences, personal_info, projects, skills};

fn db_error(err: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(err.to_string())
}

#[derive(Debug, Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentQuery<PersonalInfo> for ContentQueryPostgres {
    async fn fetch_all(&self) -> Result<Vec<PersonalInfo>, ContentQueryError> {
        let model = personal_info::Entity::find()
            .order_by_asc(personal_info::Column::Id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(model.iter().map(personal_info::Model::to_domain).collect())
    }
}

#[async_trait]
impl ContentQuery<Experience> for ContentQueryPostgres {
    /// Newest start date first; undated entries last.
    async fn fetch_all(&self) -> Result<Vec<Experience>, ContentQueryError> {
        let models = experiences::Entity::find()
            .order_by_with_nulls(
                experiences::Column::StartDate,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(experiences::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.iter().map(experiences::Model::to_domain).collect())
    }
}

#[async_trait]
impl ContentQuery<Project> for ContentQueryPostgres {
    /// Featured first, then newest.
    async fn fetch_all(&self) -> Result<Vec<Project>, ContentQueryError> {
        let models = projects::Entity::find()
            .order_by_desc(projects::Column::Featured)
            .order_by_desc(projects::Column::CreatedAt)
            .order_by_asc(projects::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.iter().map(projects::Model::to_domain).collect())
    }
}

#[async_trait]
impl ContentQuery<Skill> for ContentQueryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Skill>, ContentQueryError> {
        let models = skills::Entity::find()
            .order_by_asc(skills::Column::Category)
            .order_by_asc(skills::Column::Name)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.iter().map(skills::Model::to_domain).collect())
    }
}
