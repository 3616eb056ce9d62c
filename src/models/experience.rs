//! Work experience entries.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{decode_list, encode_list, require_date_order, require_text};
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub description: Option<String>,
    pub technologies: String, // JSON array
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Option<i32>,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    /// e.g. `full_time`, `contract`, `internship`
    pub employment_type: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub sort_order: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Experience {
    pub const ENTITY: &'static str = "experience";

    pub fn new(company: impl Into<String>, position: impl Into<String>, start_date: Date) -> Self {
        Self {
            id: None,
            company: company.into(),
            position: position.into(),
            location: None,
            employment_type: None,
            start_date,
            end_date: None,
            is_current: false,
            description: None,
            technologies: Vec::new(),
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(Self::ENTITY, "company", &self.company)?;
        require_text(Self::ENTITY, "position", &self.position)?;
        require_date_order(Self::ENTITY, Some(self.start_date), self.end_date)
    }
}

impl From<Model> for Experience {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            company: model.company,
            position: model.position,
            location: model.location,
            employment_type: model.employment_type,
            start_date: model.start_date,
            end_date: model.end_date,
            is_current: model.is_current,
            description: model.description,
            technologies: decode_list(&model.technologies),
            sort_order: model.sort_order,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}

impl From<Experience> for ActiveModel {
    fn from(experience: Experience) -> Self {
        Self {
            id: experience.id.map_or(NotSet, Set),
            company: Set(experience.company),
            position: Set(experience.position),
            location: Set(experience.location),
            employment_type: Set(experience.employment_type),
            start_date: Set(experience.start_date),
            end_date: Set(experience.end_date),
            is_current: Set(experience.is_current),
            description: Set(experience.description),
            technologies: Set(encode_list(&experience.technologies)),
            sort_order: Set(experience.sort_order),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
