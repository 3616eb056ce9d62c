use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{require_date_order, require_text};
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Option<i32>,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Education {
    pub const ENTITY: &'static str = "education";

    pub fn new(institution: impl Into<String>, degree: impl Into<String>, start_date: Date) -> Self {
        Self {
            id: None,
            institution: institution.into(),
            degree: degree.into(),
            field_of_study: None,
            start_date,
            end_date: None,
            is_current: false,
            grade: None,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(Self::ENTITY, "institution", &self.institution)?;
        require_text(Self::ENTITY, "degree", &self.degree)?;
        require_date_order(Self::ENTITY, Some(self.start_date), self.end_date)
    }
}

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            institution: model.institution,
            degree: model.degree,
            field_of_study: model.field_of_study,
            start_date: model.start_date,
            end_date: model.end_date,
            is_current: model.is_current,
            grade: model.grade,
            description: model.description,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}

impl From<Education> for ActiveModel {
    fn from(education: Education) -> Self {
        Self {
            id: education.id.map_or(NotSet, Set),
            institution: Set(education.institution),
            degree: Set(education.degree),
            field_of_study: Set(education.field_of_study),
            start_date: Set(education.start_date),
            end_date: Set(education.end_date),
            is_current: Set(education.is_current),
            grade: Set(education.grade),
            description: Set(education.description),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
