//! SeaORM implementation of ProfileRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::{ensure_id, paginate, timestamp, update_error, update_id};
use crate::domain::operation::{CREATE, DELETE, GET_ALL, GET_BY_ID, UPDATE};
use crate::domain::{
    Context, DomainError, RepoResult, RepositoryError, ProfileFilter, ProfileRepository,
};
use crate::models::Profile;
use crate::models::profile::{ActiveModel, Column, Entity as ProfileEntity};

const ENTITY: &str = Profile::ENTITY;

/// SeaORM-based implementation of ProfileRepository
pub struct SeaOrmProfileRepository {
    db: DatabaseConnection,
}

impl SeaOrmProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, filter: &ProfileFilter) -> Result<Vec<Profile>, DomainError> {
        let mut cond = Condition::all();
        if let Some(email) = &filter.email {
            cond = cond.add(Column::Email.eq(email.as_str()));
        }
        if let Some(location) = &filter.location {
            cond = cond.add(Column::Location.eq(location.as_str()));
        }

        let query = ProfileEntity::find()
            .filter(cond)
            .order_by_asc(Column::Id);

        let profiles = paginate(query, filter.pagination()).all(&self.db).await?;
        Ok(profiles.into_iter().map(Profile::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Profile, DomainError> {
        let id = ensure_id(ENTITY, id)?;
        ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Profile::from)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    async fn insert(&self, profile: Profile) -> Result<Profile, DomainError> {
        profile.validate()?;

        let now = timestamp();
        let mut active: ActiveModel = profile.into();
        active.id = NotSet;
        active.created_at = Set(now.clone());
        active.updated_at = Set(now);

        let result = active.insert(&self.db).await?;
        Ok(Profile::from(result))
    }

    async fn replace(&self, profile: Profile) -> Result<Profile, DomainError> {
        let id = update_id(ENTITY, profile.id)?;
        profile.validate()?;

        ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let mut active: ActiveModel = profile.into();
        active.updated_at = Set(timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|err| update_error(ENTITY, id, err))?;
        Ok(Profile::from(result))
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let id = ensure_id(ENTITY, id)?;
        let result = ProfileEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for SeaOrmProfileRepository {
    async fn get_all(&self, ctx: &Context, filter: &ProfileFilter) -> RepoResult<Vec<Profile>> {
        ctx.run(self.select(filter))
            .await
            .map_err(|err| RepositoryError::new(GET_ALL, ENTITY, err))
    }

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Profile> {
        ctx.run(self.find(id))
            .await
            .map_err(|err| RepositoryError::new(GET_BY_ID, ENTITY, err))
    }

    async fn create(&self, ctx: &Context, profile: Profile) -> RepoResult<Profile> {
        ctx.run(self.insert(profile))
            .await
            .map_err(|err| RepositoryError::new(CREATE, ENTITY, err))
    }

    async fn update(&self, ctx: &Context, profile: Profile) -> RepoResult<Profile> {
        ctx.run(self.replace(profile))
            .await
            .map_err(|err| RepositoryError::new(UPDATE, ENTITY, err))
    }

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()> {
        ctx.run(self.remove(id))
            .await
            .map_err(|err| RepositoryError::new(DELETE, ENTITY, err))
    }
}
