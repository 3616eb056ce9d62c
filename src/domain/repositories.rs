//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.
//!
//! Conventions shared by every trait:
//! - `create` and `update` return the stored entity; `create` is how the
//!   generated `id` reaches the caller.
//! - `update` never inserts and `delete` of a missing id is `NotFound`,
//!   including a repeated delete.
//! - Convenience reads are provided methods over `get_all`, so every
//!   implementation answers them exactly like the equivalent filter.

use async_trait::async_trait;

use super::errors::operation::{
    GET_BY_CATEGORY, GET_BY_TYPE, GET_CURRENT, GET_FEATURED, GET_PRIMARY,
};
use super::{
    AchievementFilter, Context, DomainError, EducationFilter, ExperienceFilter, ProfileFilter,
    ProjectFilter, RepoResult, RepositoryError, SkillFilter,
};
use crate::models::{Achievement, Education, Experience, Profile, Project, Skill};

/// Repository trait for Profile entity
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find all profiles matching the filter criteria
    async fn get_all(&self, ctx: &Context, filter: &ProfileFilter) -> RepoResult<Vec<Profile>>;

    /// Find a single profile by ID
    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Profile>;

    /// Create a new profile
    async fn create(&self, ctx: &Context, profile: Profile) -> RepoResult<Profile>;

    /// Update an existing profile, identified by `profile.id`
    async fn update(&self, ctx: &Context, profile: Profile) -> RepoResult<Profile>;

    /// Delete a profile by ID
    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()>;

    /// The profile the resume is rendered for: first one in `get_all` order.
    async fn get_primary(&self, ctx: &Context) -> RepoResult<Profile> {
        self.get_all(ctx, &ProfileFilter::default().with_limit(1))
            .await
            .map_err(|err| err.with_operation(GET_PRIMARY))?
            .into_iter()
            .next()
            .ok_or_else(|| {
                RepositoryError::new(
                    GET_PRIMARY,
                    Profile::ENTITY,
                    DomainError::NotFound {
                        entity: Profile::ENTITY,
                        id: None,
                    },
                )
            })
    }
}

/// Repository trait for Experience entity
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn get_all(
        &self,
        ctx: &Context,
        filter: &ExperienceFilter,
    ) -> RepoResult<Vec<Experience>>;

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Experience>;

    async fn create(&self, ctx: &Context, experience: Experience) -> RepoResult<Experience>;

    async fn update(&self, ctx: &Context, experience: Experience) -> RepoResult<Experience>;

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()>;

    /// Positions still held (`is_current = true`)
    async fn get_current(&self, ctx: &Context) -> RepoResult<Vec<Experience>> {
        self.get_all(ctx, &ExperienceFilter::default().current(true))
            .await
            .map_err(|err| err.with_operation(GET_CURRENT))
    }
}

/// Repository trait for Skill entity
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn get_all(&self, ctx: &Context, filter: &SkillFilter) -> RepoResult<Vec<Skill>>;

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Skill>;

    async fn create(&self, ctx: &Context, skill: Skill) -> RepoResult<Skill>;

    async fn update(&self, ctx: &Context, skill: Skill) -> RepoResult<Skill>;

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()>;

    async fn get_by_category(&self, ctx: &Context, category: &str) -> RepoResult<Vec<Skill>> {
        self.get_all(ctx, &SkillFilter::default().with_category(category))
            .await
            .map_err(|err| err.with_operation(GET_BY_CATEGORY))
    }

    async fn get_featured(&self, ctx: &Context) -> RepoResult<Vec<Skill>> {
        self.get_all(ctx, &SkillFilter::default().featured(true))
            .await
            .map_err(|err| err.with_operation(GET_FEATURED))
    }
}

/// Repository trait for Achievement entity
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn get_all(
        &self,
        ctx: &Context,
        filter: &AchievementFilter,
    ) -> RepoResult<Vec<Achievement>>;

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Achievement>;

    async fn create(&self, ctx: &Context, achievement: Achievement) -> RepoResult<Achievement>;

    async fn update(&self, ctx: &Context, achievement: Achievement) -> RepoResult<Achievement>;

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()>;

    /// Achievements of one type (award, certification, ...)
    async fn get_by_type(
        &self,
        ctx: &Context,
        achievement_type: &str,
    ) -> RepoResult<Vec<Achievement>> {
        self.get_all(ctx, &AchievementFilter::default().with_type(achievement_type))
            .await
            .map_err(|err| err.with_operation(GET_BY_TYPE))
    }

    async fn get_featured(&self, ctx: &Context) -> RepoResult<Vec<Achievement>> {
        self.get_all(ctx, &AchievementFilter::default().featured(true))
            .await
            .map_err(|err| err.with_operation(GET_FEATURED))
    }
}

/// Repository trait for Education entity
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn get_all(&self, ctx: &Context, filter: &EducationFilter) -> RepoResult<Vec<Education>>;

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Education>;

    async fn create(&self, ctx: &Context, education: Education) -> RepoResult<Education>;

    async fn update(&self, ctx: &Context, education: Education) -> RepoResult<Education>;

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()>;

    /// Programs still in progress (`is_current = true`)
    async fn get_current(&self, ctx: &Context) -> RepoResult<Vec<Education>> {
        self.get_all(ctx, &EducationFilter::default().current(true))
            .await
            .map_err(|err| err.with_operation(GET_CURRENT))
    }
}

/// Repository trait for Project entity
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_all(&self, ctx: &Context, filter: &ProjectFilter) -> RepoResult<Vec<Project>>;

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Project>;

    async fn create(&self, ctx: &Context, project: Project) -> RepoResult<Project>;

    async fn update(&self, ctx: &Context, project: Project) -> RepoResult<Project>;

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()>;

    async fn get_by_category(&self, ctx: &Context, category: &str) -> RepoResult<Vec<Project>> {
        self.get_all(ctx, &ProjectFilter::default().with_category(category))
            .await
            .map_err(|err| err.with_operation(GET_BY_CATEGORY))
    }

    async fn get_featured(&self, ctx: &Context) -> RepoResult<Vec<Project>> {
        self.get_all(ctx, &ProjectFilter::default().featured(true))
            .await
            .map_err(|err| err.with_operation(GET_FEATURED))
    }
}
