//! Domain error types
//!
//! Two layers live here:
//! - `DomainError` is the cause taxonomy produced by storage adapters
//!   (not found, validation, storage failure, cancellation).
//! - `RepositoryError` wraps any cause with the operation and entity that
//!   failed, without hiding the cause from `source()`-based inspection.

use std::error::Error as StdError;

/// Boxed cause carried by `RepositoryError`.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used by every repository contract.
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Operation names recorded in `RepositoryError::operation`.
pub mod operation {
    pub const GET_ALL: &str = "get_all";
    pub const GET_BY_ID: &str = "get_by_id";
    pub const GET_PRIMARY: &str = "get_primary";
    pub const GET_BY_CATEGORY: &str = "get_by_category";
    pub const GET_BY_TYPE: &str = "get_by_type";
    pub const GET_FEATURED: &str = "get_featured";
    pub const GET_CURRENT: &str = "get_current";
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Requested identity is absent.
    NotFound,
    /// Caller-supplied data failed required-field checks.
    Validation,
    /// Underlying engine failed or timed out.
    StorageUnavailable,
    /// Context was cancelled or its deadline passed.
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::StorageUnavailable => "storage_unavailable",
            ErrorKind::Cancelled => "cancelled",
        }
    }

    /// HTTP status class a handler layer should answer with.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation => 400,
            ErrorKind::StorageUnavailable | ErrorKind::Cancelled => 500,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Resource not found
    #[error("{entity} not found{}", .id.map(|id| format!(" (id {id})")).unwrap_or_default())]
    NotFound {
        entity: &'static str,
        id: Option<i32>,
    },
    /// Validation error with message
    #[error("validation error: {0}")]
    Validation(String),
    /// Database/persistence error
    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
    #[error("operation cancelled")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DomainError::NotFound {
            entity,
            id: Some(id),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Storage(_) => ErrorKind::StorageUnavailable,
            DomainError::Cancelled | DomainError::DeadlineExceeded => ErrorKind::Cancelled,
        }
    }
}

/// Uniform failure of a repository call.
///
/// The rendered message always names the operation, the entity and the
/// cause. `source()` returns the cause untouched, so kind checks keep working
/// through any number of wrapping layers.
#[derive(Debug, thiserror::Error)]
#[error("repository error during {operation} on {entity}: {cause}")]
pub struct RepositoryError {
    operation: &'static str,
    entity: &'static str,
    #[source]
    cause: BoxError,
}

impl RepositoryError {
    pub fn new(operation: &'static str, entity: &'static str, cause: impl Into<BoxError>) -> Self {
        Self {
            operation,
            entity,
            cause: cause.into(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// Re-labels the operation while keeping entity and cause.
    ///
    /// Used by convenience reads that delegate to `get_all`.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = operation;
        self
    }

    /// First error of type `E` in the cause chain.
    pub fn find_cause<E: StdError + 'static>(&self) -> Option<&E> {
        let first: &(dyn StdError + 'static) = self.cause.as_ref();
        let mut current = Some(first);
        while let Some(err) = current {
            if let Some(found) = err.downcast_ref::<E>() {
                return Some(found);
            }
            current = err.source();
        }
        None
    }

    /// Kind of the innermost classified cause.
    ///
    /// Unclassified causes count as storage failures.
    pub fn kind(&self) -> ErrorKind {
        self.find_cause::<DomainError>()
            .map(DomainError::kind)
            .unwrap_or(ErrorKind::StorageUnavailable)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct DiskFull;

    impl fmt::Display for DiskFull {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "disk full")
        }
    }

    impl StdError for DiskFull {}

    #[test]
    fn message_names_operation_entity_and_cause() {
        let err = RepositoryError::new(operation::GET_ALL, "skill", DiskFull);
        assert_eq!(
            err.to_string(),
            "repository error during get_all on skill: disk full"
        );
    }

    #[test]
    fn source_is_the_original_cause() {
        let cause: BoxError = Box::new(DiskFull);
        let cause_ptr = cause.as_ref() as *const (dyn StdError + Send + Sync) as *const ();

        let err = RepositoryError::new("op", "entity", cause);
        let source = err.source().expect("cause must be exposed");
        let source_ptr = source as *const dyn StdError as *const ();

        assert_eq!(source_ptr, cause_ptr);
        assert!(err.into_cause().downcast::<DiskFull>().is_ok());
    }

    #[test]
    fn kind_survives_nested_wrapping() {
        let inner = RepositoryError::new(
            operation::GET_BY_ID,
            "project",
            DomainError::not_found("project", 7),
        );
        let outer = RepositoryError::new("load_resume", "resume", inner);
        let outermost = RepositoryError::new("render", "page", outer);

        assert_eq!(outermost.kind(), ErrorKind::NotFound);
        assert!(outermost.is_not_found());
        assert!(matches!(
            outermost.find_cause::<DomainError>(),
            Some(DomainError::NotFound { id: Some(7), .. })
        ));
    }

    #[test]
    fn kind_maps_every_cause_variant() {
        let cases = [
            (DomainError::not_found("skill", 1), ErrorKind::NotFound),
            (DomainError::validation("name is required"), ErrorKind::Validation),
            (
                DomainError::Storage(sea_orm::DbErr::Custom("boom".into())),
                ErrorKind::StorageUnavailable,
            ),
            (DomainError::Cancelled, ErrorKind::Cancelled),
            (DomainError::DeadlineExceeded, ErrorKind::Cancelled),
        ];

        for (cause, expected) in cases {
            let err = RepositoryError::new(operation::CREATE, "skill", cause);
            assert_eq!(err.kind(), expected, "{err}");
        }
    }

    #[test]
    fn unclassified_cause_is_storage_unavailable() {
        let err = RepositoryError::new(operation::DELETE, "education", DiskFull);
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
        assert_eq!(err.kind().status_code(), 500);
    }

    #[test]
    fn storage_cause_keeps_db_error_reachable() {
        let err = RepositoryError::new(
            operation::GET_ALL,
            "experience",
            DomainError::from(sea_orm::DbErr::Custom("pool timed out".into())),
        );
        assert!(matches!(
            err.find_cause::<sea_orm::DbErr>(),
            Some(sea_orm::DbErr::Custom(msg)) if msg == "pool timed out"
        ));
    }

    #[test]
    fn with_operation_keeps_entity_and_cause() {
        let err = RepositoryError::new(operation::GET_ALL, "skill", DomainError::Cancelled)
            .with_operation(operation::GET_FEATURED);
        assert_eq!(err.operation(), "get_featured");
        assert_eq!(err.entity(), "skill");
        assert!(err.is_cancelled());
    }

    #[test]
    fn not_found_message_includes_id_when_known() {
        assert_eq!(
            DomainError::not_found("profile", 3).to_string(),
            "profile not found (id 3)"
        );
        let no_id = DomainError::NotFound {
            entity: "profile",
            id: None,
        };
        assert_eq!(no_id.to_string(), "profile not found");
    }
}
