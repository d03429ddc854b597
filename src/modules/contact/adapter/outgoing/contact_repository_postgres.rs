use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, NewContactMessage,
};
use crate::modules::contact::domain::ContactMessage;

use super::sea_orm_entity::contact_messages;

fn db_error(err: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(err.to_string())
}

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let model = contact_messages::ActiveModel {
            id: NotSet,
            name: Set(data.name),
            email: Set(data.email),
            message: Set(data.message),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(model.to_domain())
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let models = contact_messages::Entity::find()
            .order_by_desc(contact_messages::Column::CreatedAt)
            .order_by_desc(contact_messages::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.iter().map(contact_messages::Model::to_domain).collect())
    }
}
