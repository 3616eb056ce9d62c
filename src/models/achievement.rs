//! Awards, certifications, publications and similar milestones.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub achievement_type: String,
    pub issuer: Option<String>,
    pub achieved_on: Date,
    pub description: Option<String>,
    pub url: Option<String>,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Option<i32>,
    pub title: String,
    /// e.g. `award`, `certification`, `publication`
    pub achievement_type: String,
    pub issuer: Option<String>,
    pub achieved_on: Date,
    pub description: Option<String>,
    pub url: Option<String>,
    pub is_featured: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Achievement {
    pub const ENTITY: &'static str = "achievement";

    pub fn new(
        title: impl Into<String>,
        achievement_type: impl Into<String>,
        achieved_on: Date,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            achievement_type: achievement_type.into(),
            issuer: None,
            achieved_on,
            description: None,
            url: None,
            is_featured: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(Self::ENTITY, "title", &self.title)?;
        require_text(Self::ENTITY, "achievement_type", &self.achievement_type)
    }
}

impl From<Model> for Achievement {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            achievement_type: model.achievement_type,
            issuer: model.issuer,
            achieved_on: model.achieved_on,
            description: model.description,
            url: model.url,
            is_featured: model.is_featured,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}

impl From<Achievement> for ActiveModel {
    fn from(achievement: Achievement) -> Self {
        Self {
            id: achievement.id.map_or(NotSet, Set),
            title: Set(achievement.title),
            achievement_type: Set(achievement.achievement_type),
            issuer: Set(achievement.issuer),
            achieved_on: Set(achievement.achieved_on),
            description: Set(achievement.description),
            url: Set(achievement.url),
            is_featured: Set(achievement.is_featured),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
