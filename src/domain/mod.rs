//! Domain layer - Pure business abstractions
//!
//! Repository contracts, their filter objects, the call context and the
//! error types callers inspect. Storage adapters live in `infrastructure`.

pub mod context;
pub mod errors;
pub mod filters;
pub mod repositories;

pub use context::Context;
pub use errors::{BoxError, DomainError, ErrorKind, RepoResult, RepositoryError, operation};
pub use filters::*;
pub use repositories::*;
