//! Profile record: the person a resume describes.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub headline: String,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO handed to callers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<i32>,
    pub full_name: String,
    pub headline: String,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Profile {
    pub const ENTITY: &'static str = "profile";

    pub fn new(full_name: impl Into<String>, headline: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            headline: headline.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(Self::ENTITY, "full_name", &self.full_name)?;
        require_text(Self::ENTITY, "headline", &self.headline)
    }
}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            full_name: model.full_name,
            headline: model.headline,
            summary: model.summary,
            email: model.email,
            phone: model.phone,
            location: model.location,
            website: model.website,
            github_url: model.github_url,
            linkedin_url: model.linkedin_url,
            avatar_url: model.avatar_url,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}

impl From<Profile> for ActiveModel {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.map_or(NotSet, Set),
            full_name: Set(profile.full_name),
            headline: Set(profile.headline),
            summary: Set(profile.summary),
            email: Set(profile.email),
            phone: Set(profile.phone),
            location: Set(profile.location),
            website: Set(profile.website),
            github_url: Set(profile.github_url),
            linkedin_url: Set(profile.linkedin_url),
            avatar_url: Set(profile.avatar_url),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
