use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::domain::{decode_string_list, encode_string_list, Experience};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_title: String,
    pub company: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub description: String,
    /// JSON array text
    pub achievements: Option<String>,
    pub is_current: bool,
}

impl Model {
    pub fn to_domain(&self) -> Experience {
        Experience {
            id: self.id,
            job_title: self.job_title.clone(),
            company: self.company.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
            achievements: decode_string_list(self.achievements.as_deref()),
            is_current: self.is_current,
        }
    }
}

impl From<&Experience> for ActiveModel {
    fn from(exp: &Experience) -> Self {
        Self {
            id: Set(exp.id),
            job_title: Set(exp.job_title.clone()),
            company: Set(exp.company.clone()),
            start_date: Set(exp.start_date),
            end_date: Set(exp.end_date),
            description: Set(exp.description.clone()),
            achievements: Set(Some(encode_string_list(&exp.achievements))),
            is_current: Set(exp.is_current),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
