//! SeaORM implementation of ProjectRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::{ensure_id, paginate, timestamp, update_error, update_id, year_bounds};
use crate::domain::operation::{CREATE, DELETE, GET_ALL, GET_BY_ID, UPDATE};
use crate::domain::{
    Context, DomainError, RepoResult, RepositoryError, ProjectFilter, ProjectRepository,
};
use crate::models::Project;
use crate::models::project::{ActiveModel, Column, Entity as ProjectEntity};

const ENTITY: &str = Project::ENTITY;

/// SeaORM-based implementation of ProjectRepository
pub struct SeaOrmProjectRepository {
    db: DatabaseConnection,
}

impl SeaOrmProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DomainError> {
        let mut cond = Condition::all();
        if let Some(category) = &filter.category {
            cond = cond.add(Column::Category.eq(category.as_str()));
        }
        if let Some(status) = &filter.status {
            cond = cond.add(Column::Status.eq(status.as_str()));
        }
        if let Some(year) = filter.year {
            let (first, last) = year_bounds(year)?;
            cond = cond.add(Column::StartDate.between(first, last));
        }
        if let Some(featured) = filter.is_featured {
            cond = cond.add(Column::IsFeatured.eq(featured));
        }

        let query = ProjectEntity::find()
            .filter(cond)
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Id);

        let projects = paginate(query, filter.pagination()).all(&self.db).await?;
        Ok(projects.into_iter().map(Project::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Project, DomainError> {
        let id = ensure_id(ENTITY, id)?;
        ProjectEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Project::from)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    async fn insert(&self, project: Project) -> Result<Project, DomainError> {
        project.validate()?;

        let now = timestamp();
        let mut active: ActiveModel = project.into();
        active.id = NotSet;
        active.created_at = Set(now.clone());
        active.updated_at = Set(now);

        let result = active.insert(&self.db).await?;
        Ok(Project::from(result))
    }

    async fn replace(&self, project: Project) -> Result<Project, DomainError> {
        let id = update_id(ENTITY, project.id)?;
        project.validate()?;

        ProjectEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let mut active: ActiveModel = project.into();
        active.updated_at = Set(timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|err| update_error(ENTITY, id, err))?;
        Ok(Project::from(result))
    }

    async fn remove(&self, id: i32) -> Result<(), DomainError> {
        let id = ensure_id(ENTITY, id)?;
        let result = ProjectEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for SeaOrmProjectRepository {
    async fn get_all(&self, ctx: &Context, filter: &ProjectFilter) -> RepoResult<Vec<Project>> {
        ctx.run(self.select(filter))
            .await
            .map_err(|err| RepositoryError::new(GET_ALL, ENTITY, err))
    }

    async fn get_by_id(&self, ctx: &Context, id: i32) -> RepoResult<Project> {
        ctx.run(self.find(id))
            .await
            .map_err(|err| RepositoryError::new(GET_BY_ID, ENTITY, err))
    }

    async fn create(&self, ctx: &Context, project: Project) -> RepoResult<Project> {
        ctx.run(self.insert(project))
            .await
            .map_err(|err| RepositoryError::new(CREATE, ENTITY, err))
    }

    async fn update(&self, ctx: &Context, project: Project) -> RepoResult<Project> {
        ctx.run(self.replace(project))
            .await
            .map_err(|err| RepositoryError::new(UPDATE, ENTITY, err))
    }

    async fn delete(&self, ctx: &Context, id: i32) -> RepoResult<()> {
        ctx.run(self.remove(id))
            .await
            .map_err(|err| RepositoryError::new(DELETE, ENTITY, err))
    }
}
