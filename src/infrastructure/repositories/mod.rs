//! Repository implementations using SeaORM
//!
//! Every adapter follows the same shape: private `async fn`s return
//! `DomainError`, and the trait methods run them through the caller's
//! `Context` and wrap failures in `RepositoryError`.

pub mod achievement_repository;
pub mod education_repository;
pub mod experience_repository;
pub mod profile_repository;
pub mod project_repository;
pub mod skill_repository;

pub use achievement_repository::SeaOrmAchievementRepository;
pub use education_repository::SeaOrmEducationRepository;
pub use experience_repository::SeaOrmExperienceRepository;
pub use profile_repository::SeaOrmProfileRepository;
pub use project_repository::SeaOrmProjectRepository;
pub use skill_repository::SeaOrmSkillRepository;

use chrono::NaiveDate;
use sea_orm::{DbErr, QuerySelect};

use crate::domain::{DomainError, Pagination};

/// Applies `limit`/`offset`; an offset alone still needs a LIMIT in SQLite.
pub(crate) fn paginate<Q: QuerySelect>(query: Q, page: Pagination) -> Q {
    match (page.limit, page.offset) {
        (None, None) => query,
        (Some(limit), None) => query.limit(limit),
        (limit, Some(offset)) => query
            .limit(limit.unwrap_or(i64::MAX as u64))
            .offset(offset),
    }
}

pub(crate) fn ensure_id(entity: &'static str, id: i32) -> Result<i32, DomainError> {
    if id <= 0 {
        return Err(DomainError::validation(format!(
            "{entity}.id must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

/// Identity of an entity passed to `update`.
pub(crate) fn update_id(entity: &'static str, id: Option<i32>) -> Result<i32, DomainError> {
    let id = id.ok_or_else(|| DomainError::validation(format!("{entity}.id is required")))?;
    ensure_id(entity, id)
}

/// A row deleted between lookup and write is reported as not found.
pub(crate) fn update_error(entity: &'static str, id: i32, err: DbErr) -> DomainError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => DomainError::not_found(entity, id),
        other => DomainError::Storage(other),
    }
}

pub(crate) fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    first
        .zip(last)
        .ok_or_else(|| DomainError::validation(format!("year {year} is out of range")))
}

pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_ids_are_rejected() {
        assert!(ensure_id("skill", 0).is_err());
        assert!(ensure_id("skill", -4).is_err());
        assert_eq!(ensure_id("skill", 9).unwrap(), 9);
    }

    #[test]
    fn update_requires_identity() {
        let err = update_id("project", None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg == "project.id is required"));
    }

    #[test]
    fn record_not_updated_becomes_not_found() {
        let err = update_error("skill", 3, DbErr::RecordNotUpdated);
        assert!(matches!(err, DomainError::NotFound { id: Some(3), .. }));
        let err = update_error("skill", 3, DbErr::Custom("locked".into()));
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[test]
    fn year_bounds_cover_the_calendar_year() {
        let (first, last) = year_bounds(2022).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        assert!(year_bounds(i32::MAX).is_err());
    }
}
