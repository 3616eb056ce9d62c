//! SeaORM implementation of EducationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::{ensure_id, paginate, timestamp, update_error, update_id};
use crate::domain::operation::{CREATE, DELETE, GET_ALL, GET_BY_ID, UPDATE};
use crate::domain::{
    Context, DomainError, RepoResult, RepositoryError, EducationFilter, EducationRepository,
};
use crate::models::Education;
use crate::models::education::{ActiveModel, Column, Entity as EducationEntity};

const ENTITY: &str = Education::ENTITY;

/// SeaORM-based implementation of EducationRepository
pub struct SeaOrmEducationRepository {
    db: DatabaseConnection,
}

impl SeaOrmEducationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, filter: &EducationFilter) -> Result<Vec<Education>, DomainError> {
        let mut cond = Condition::all();
        if let Some(institution) = &filter.institution {
            cond = cond.add(Column::Institution.eq(institution.as_str()));
        }
        if let Some(degree) = &filter.degree {
            cond = cond.add(Column::Degree.eq(degree.as_str()));
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

        let query = EducationEntity::find()
            .filter(cond)
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Id);

        let education = paginate(query, filter.pagination()).all(&self.db).await?;
        Ok(education.into_iter().map(Education::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Education, DomainError> {
        let id = ensure_id(ENTITY, id)?;
        EducationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Education::from)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    async fn insert(&self, education: Education) -> Result<Education, DomainError> {
        education.validate()?;

        let now = timestamp();
        let mut active: ActiveModel = education.into();
        active.id = NotSet;
        active.created_at = Set(now.clone());
        active.updated_at = Set(now);

        let result = active.insert(&self.db).await?;
        Ok(Education::from(result))
    }

    async fn replace(&self, education: Education) -> Result<Education, DomainError> {
        let id = update_id(ENTITY, education.id)?;
        education.validate()?;

        EducationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let mut active: ActiveModel = education.into();
        active.updated_at = Set(timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|err| update_error(ENTITY, id, err))?;
        Ok(Education::from(result))
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let id = ensure_id(ENTITY, id)?;
        let result = EducationEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

#[async_trait]
impl EducationRepository for SeaOrmEducationRepository {
    async fn get_all(&self, ctx: &Context, filter: &EducationFilter) -> RepoResult<Vec<Education>> {
        ctx.run(self.select(filter))
            .await
            .map_err(|err| RepositoryError::new(GET_ALL, ENTITY, err))
    }

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Education> {
        ctx.run(self.find(id))
            .await
            .map_err(|err| RepositoryError::new(GET_BY_ID, ENTITY, err))
    }

    async fn create(&self, ctx: &Context, education: Education) -> RepoResult<Education> {
        ctx.run(self.insert(education))
            .await
            .map_err(|err| RepositoryError::new(CREATE, ENTITY, err))
    }

    async fn update(&self, ctx: &Context, education: Education) -> RepoResult<Education> {
        ctx.run(self.replace(education))
            .await
            .map_err(|err| RepositoryError::new(UPDATE, ENTITY, err))
    }

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()> {
        ctx.run(self.remove(id))
            .await
            .map_err(|err| RepositoryError::new(DELETE, ENTITY, err))
    }
}
