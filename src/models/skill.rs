//! Skill entries grouped by category.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::domain::DomainError;

pub const MIN_PROFICIENCY: i32 = 1;
pub const MAX_PROFICIENCY: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    pub years_of_experience: Option<i32>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Option<i32>,
    pub name: String,
    pub category: String,
    /// 1 (beginner) to 5 (expert)
    pub proficiency: i32,
    pub years_of_experience: Option<i32>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Skill {
    pub const ENTITY: &'static str = "skill";

    pub fn new(name: impl Into<String>, category: impl Into<String>, proficiency: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            proficiency,
            years_of_experience: None,
            is_featured: false,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(Self::ENTITY, "name", &self.name)?;
        require_text(Self::ENTITY, "category", &self.category)?;
        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&self.proficiency) {
            return Err(DomainError::validation(format!(
                "skill.proficiency must be between {MIN_PROFICIENCY} and {MAX_PROFICIENCY}, got {}",
                self.proficiency
            )));
        }
        if let Some(years) = self.years_of_experience
            && years < 0
        {
            return Err(DomainError::validation(
                "skill.years_of_experience cannot be negative",
            ));
        }
        Ok(())
    }
}

impl From<Model> for Skill {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            category: model.category,
            proficiency: model.proficiency,
            years_of_experience: model.years_of_experience,
            is_featured: model.is_featured,
            sort_order: model.sort_order,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}

impl From<Skill> for ActiveModel {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id.map_or(NotSet, Set),
            name: Set(skill.name),
            category: Set(skill.category),
            proficiency: Set(skill.proficiency),
            years_of_experience: Set(skill.years_of_experience),
            is_featured: Set(skill.is_featured),
            sort_order: Set(skill.sort_order),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
