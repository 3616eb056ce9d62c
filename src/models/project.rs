//! Portfolio projects.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{decode_list, encode_list, require_date_order, require_text};
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub status: Option<String>,
    pub technologies: String, // JSON array
    pub url: Option<String>,
    pub repository_url: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    /// e.g. `active`, `completed`, `archived`
    pub status: Option<String>,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub repository_url: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Project {
    pub const ENTITY: &'static str = "project";

    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(Self::ENTITY, "name", &self.name)?;
        require_text(Self::ENTITY, "category", &self.category)?;
        require_date_order(Self::ENTITY, self.start_date, self.end_date)
    }
}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            category: model.category,
            status: model.status,
            technologies: decode_list(&model.technologies),
            url: model.url,
            repository_url: model.repository_url,
            start_date: model.start_date,
            end_date: model.end_date,
            is_featured: model.is_featured,
            sort_order: model.sort_order,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}

impl From<Project> for ActiveModel {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.map_or(NotSet, Set),
            name: Set(project.name),
            description: Set(project.description),
            category: Set(project.category),
            status: Set(project.status),
            technologies: Set(encode_list(&project.technologies)),
            url: Set(project.url),
            repository_url: Set(project.repository_url),
            start_date: Set(project.start_date),
            end_date: Set(project.end_date),
            is_featured: Set(project.is_featured),
            sort_order: Set(project.sort_order),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
