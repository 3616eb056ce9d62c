//! SeaORM implementation of ExperienceRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::{ensure_id, paginate, timestamp, update_error, update_id};
use crate::domain::operation::{CREATE, DELETE, GET_ALL, GET_BY_ID, UPDATE};
use crate::domain::{
    Context, DomainError, RepoResult, RepositoryError, ExperienceFilter, ExperienceRepository,
};
use crate::models::Experience;
use crate::models::experience::{ActiveModel, Column, Entity as ExperienceEntity};

const ENTITY: &str = Experience::ENTITY;

/// SeaORM-based implementation of ExperienceRepository
pub struct SeaOrmExperienceRepository {
    db: DatabaseConnection,
}

impl SeaOrmExperienceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, filter: &ExperienceFilter) -> Result<Vec<Experience>, DomainError> {
        let mut cond = Condition::all();
        if let Some(company) = &filter.company {
            cond = cond.add(Column::Company.eq(company.as_str()));
        }
        if let Some(employment_type) = &filter.employment_type {
            cond = cond.add(Column::EmploymentType.eq(employment_type.as_str()));
        }
        if let Some(from) = filter.started_after {
            cond = cond.add(Column::StartDate.gte(from));
        }
        if let Some(to) = filter.started_before {
            cond = cond.add(Column::StartDate.lte(to));
        }
        if let Some(current) = filter.is_current {
            cond = cond.add(Column::IsCurrent.eq(current));
        }

        // Most recent first within an explicit sort order
        let query = ExperienceEntity::find()
            .filter(cond)
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Id);

        let experiences = paginate(query, filter.pagination()).all(&self.db).await?;
        Ok(experiences.into_iter().map(Experience::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Experience, DomainError> {
        let id = ensure_id(ENTITY, id)?;
        ExperienceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Experience::from)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    async fn insert(&self, experience: Experience) -> Result<Experience, DomainError> {
        experience.validate()?;

        let now = timestamp();
        let mut active: ActiveModel = experience.into();
        active.id = NotSet;
        active.created_at = Set(now.clone());
        active.updated_at = Set(now);

        let result = active.insert(&self.db).await?;
        Ok(Experience::from(result))
    }

    async fn replace(&self, experience: Experience) -> Result<Experience, DomainError> {
        let id = update_id(ENTITY, experience.id)?;
        experience.validate()?;

        ExperienceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let mut active: ActiveModel = experience.into();
        active.updated_at = Set(timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|err| update_error(ENTITY, id, err))?;
        Ok(Experience::from(result))
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let id = ensure_id(ENTITY, id)?;
        let result = ExperienceEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for SeaOrmExperienceRepository {
    async fn get_all(&self, ctx: &Context, filter: &ExperienceFilter) -> RepoResult<Vec<Experience>> {
        ctx.run(self.select(filter))
            .await
            .map_err(|err| RepositoryError::new(GET_ALL, ENTITY, err))
    }

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Experience> {
        ctx.run(self.find(id))
            .await
            .map_err(|err| RepositoryError::new(GET_BY_ID, ENTITY, err))
    }

    async fn create(&self, ctx: &Context, experience: Experience) -> RepoResult<Experience> {
        ctx.run(self.insert(experience))
            .await
            .map_err(|err| RepositoryError::new(CREATE, ENTITY, err))
    }

    async fn update(&self, ctx: &Context, experience: Experience) -> RepoResult<Experience> {
        ctx.run(self.replace(experience))
            .await
            .map_err(|err| RepositoryError::new(UPDATE, ENTITY, err))
    }

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()> {
        ctx.run(self.remove(id))
            .await
            .map_err(|err| RepositoryError::new(DELETE, ENTITY, err))
    }
}
