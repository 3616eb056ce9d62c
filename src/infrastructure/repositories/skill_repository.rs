//! SeaORM implementation of SkillRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::{ensure_id, paginate, timestamp, update_error, update_id};
use crate::domain::operation::{CREATE, DELETE, GET_ALL, GET_BY_ID, UPDATE};
use crate::domain::{
    Context, DomainError, RepoResult, RepositoryError, SkillFilter, SkillRepository,
};
use crate::models::Skill;
use crate::models::skill::{ActiveModel, Column, Entity as SkillEntity};

const ENTITY: &str = Skill::ENTITY;

/// SeaORM-based implementation of SkillRepository
pub struct SeaOrmSkillRepository {
    db: DatabaseConnection,
}

impl SeaOrmSkillRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, filter: &SkillFilter) -> Result<Vec<Skill>, DomainError> {
        let mut cond = Condition::all();
        if let Some(category) = &filter.category {
            cond = cond.add(Column::Category.eq(category.as_str()));
        }
        if let Some(min) = filter.min_proficiency {
            cond = cond.add(Column::Proficiency.gte(min));
        }
        if let Some(featured) = filter.is_featured {
            cond = cond.add(Column::IsFeatured.eq(featured));
        }

        let query = SkillEntity::find()
            .filter(cond)
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id);

        let skills = paginate(query, filter.pagination()).all(&self.db).await?;
        Ok(skills.into_iter().map(Skill::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Skill, DomainError> {
        let id = ensure_id(ENTITY, id)?;
        SkillEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Skill::from)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    async fn insert(&self, skill: Skill) -> Result<Skill, DomainError> {
        skill.validate()?;

        let now = timestamp();
        let mut active: ActiveModel = skill.into();
        active.id = NotSet;
        active.created_at = Set(now.clone());
        active.updated_at = Set(now);

        let result = active.insert(&self.db).await?;
        Ok(Skill::from(result))
    }

    async fn replace(&self, skill: Skill) -> Result<Skill, DomainError> {
        let id = update_id(ENTITY, skill.id)?;
        skill.validate()?;

        SkillEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let mut active: ActiveModel = skill.into();
        active.updated_at = Set(timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|err| update_error(ENTITY, id, err))?;
        Ok(Skill::from(result))
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let id = ensure_id(ENTITY, id)?;
        let result = SkillEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

#[async_trait]
impl SkillRepository for SeaOrmSkillRepository {
    async fn get_all(&self, ctx: &Context, filter: &SkillFilter) -> RepoResult<Vec<Skill>> {
        ctx.run(self.select(filter))
            .await
            .map_err(|err| RepositoryError::new(GET_ALL, ENTITY, err))
    }

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Skill> {
        ctx.run(self.find(id))
            .await
            .map_err(|err| RepositoryError::new(GET_BY_ID, ENTITY, err))
    }

    async fn create(&self, ctx: &Context, skill: Skill) -> RepoResult<Skill> {
        ctx.run(self.insert(skill))
            .await
            .map_err(|err| RepositoryError::new(CREATE, ENTITY, err))
    }

    async fn update(&self, ctx: &Context, skill: Skill) -> RepoResult<Skill> {
        ctx.run(self.replace(skill))
            .await
            .map_err(|err| RepositoryError::new(UPDATE, ENTITY, err))
    }

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()> {
        ctx.run(self.remove(id))
            .await
            .map_err(|err| RepositoryError::new(DELETE, ENTITY, err))
    }
}
