use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::domain::PersonalInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "personal_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Model {
    pub fn to_domain(&self) -> PersonalInfo {
        PersonalInfo {
            id: self.id,
            full_name: self.full_name.clone(),
            title: self.title.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            github_url: self.github_url.clone(),
            linkedin_url: self.linkedin_url.clone(),
        }
    }
}

impl From<&PersonalInfo> for ActiveModel {
    fn from(info: &PersonalInfo) -> Self {
        Self {
            id: Set(info.id),
            full_name: Set(info.full_name.clone()),
            title: Set(info.title.clone()),
            bio: Set(info.bio.clone()),
            location: Set(info.location.clone()),
            email: Set(info.email.clone()),
            phone: Set(info.phone.clone()),
            github_url: Set(info.github_url.clone()),
            linkedin_url: Set(info.linkedin_url.clone()),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
