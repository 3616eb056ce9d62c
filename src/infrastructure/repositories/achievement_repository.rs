//! SeaORM implementation of AchievementRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::{ensure_id, paginate, timestamp, update_error, update_id, year_bounds};
use crate::domain::operation::{CREATE, DELETE, GET_ALL, GET_BY_ID, UPDATE};
use crate::domain::{
    Context, DomainError, RepoResult, RepositoryError, AchievementFilter, AchievementRepository,
};
use crate::models::Achievement;
use crate::models::achievement::{ActiveModel, Column, Entity as AchievementEntity};

const ENTITY: &str = Achievement::ENTITY;

/// SeaORM-based implementation of AchievementRepository
pub struct SeaOrmAchievementRepository {
    db: DatabaseConnection,
}

impl SeaOrmAchievementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, filter: &AchievementFilter) -> Result<Vec<Achievement>, DomainError> {
        let mut cond = Condition::all();
        if let Some(achievement_type) = &filter.achievement_type {
            cond = cond.add(Column::AchievementType.eq(achievement_type.as_str()));
        }
        if let Some(issuer) = &filter.issuer {
            cond = cond.add(Column::Issuer.eq(issuer.as_str()));
        }
        if let Some(year) = filter.year {
            let (first, last) = year_bounds(year)?;
            cond = cond.add(Column::AchievedOn.between(first, last));
        }
        if let Some(from) = filter.date_from {
            cond = cond.add(Column::AchievedOn.gte(from));
        }
        if let Some(to) = filter.date_to {
            cond = cond.add(Column::AchievedOn.lte(to));
        }
        if let Some(featured) = filter.is_featured {
            cond = cond.add(Column::IsFeatured.eq(featured));
        }

        let query = AchievementEntity::find()
            .filter(cond)
            .order_by_desc(Column::AchievedOn)
            .order_by_asc(Column::Id);

        let achievements = paginate(query, filter.pagination()).all(&self.db).await?;
        Ok(achievements.into_iter().map(Achievement::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Achievement, DomainError> {
        let id = ensure_id(ENTITY, id)?;
        AchievementEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Achievement::from)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    async fn insert(&self, achievement: Achievement) -> Result<Achievement, DomainError> {
        achievement.validate()?;

        let now = timestamp();
        let mut active: ActiveModel = achievement.into();
        active.id = NotSet;
        active.created_at = Set(now.clone());
        active.updated_at = Set(now);

        let result = active.insert(&self.db).await?;
        Ok(Achievement::from(result))
    }

    async fn replace(&self, achievement: Achievement) -> Result<Achievement, DomainError> {
        let id = update_id(ENTITY, achievement.id)?;
        achievement.validate()?;

        AchievementEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let mut active: ActiveModel = achievement.into();
        active.updated_at = Set(timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|err| update_error(ENTITY, id, err))?;
        Ok(Achievement::from(result))
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let id = ensure_id(ENTITY, id)?;
        let result = AchievementEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

#[async_trait]
impl AchievementRepository for SeaOrmAchievementRepository {
    async fn get_all(&self, ctx: &Context, filter: &AchievementFilter) -> RepoResult<Vec<Achievement>> {
        ctx.run(self.select(filter))
            .await
            .map_err(|err| RepositoryError::new(GET_ALL, ENTITY, err))
    }

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Achievement> {
        ctx.run(self.find(id))
            .await
            .map_err(|err| RepositoryError::new(GET_BY_ID, ENTITY, err))
    }

    async fn create(&self, ctx: &Context, achievement: Achievement) -> RepoResult<Achievement> {
        ctx.run(self.insert(achievement))
            .await
            .map_err(|err| RepositoryError::new(CREATE, ENTITY, err))
    }

    async fn update(&self, ctx: &Context, achievement: Achievement) -> RepoResult<Achievement> {
        ctx.run(self.replace(achievement))
            .await
            .map_err(|err| RepositoryError::new(UPDATE, ENTITY, err))
    }

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()> {
        ctx.run(self.remove(id))
            .await
            .map_err(|err| RepositoryError::new(DELETE, ENTITY, err))
    }
}
