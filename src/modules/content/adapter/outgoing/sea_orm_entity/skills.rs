use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::content::domain::Skill;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub proficiency_level: i32,
    pub is_technical: bool,
}

impl Model {
    pub fn to_domain(&self) -> Skill {
        Skill {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            proficiency_level: self.proficiency_level,
            is_technical: self.is_technical,
        }
    }
}

impl From<&Skill> for ActiveModel {
    fn from(skill: &Skill) -> Self {
        Self {
            id: Set(skill.id),
            name: Set(skill.name.clone()),
            category: Set(skill.category.clone()),
            proficiency_level: Set(skill.proficiency_level),
            is_technical: Set(skill.is_technical),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
