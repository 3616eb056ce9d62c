//! Data-access layer for a personal resume service.
//!
//! Upper layers hold a [`Repositories`] container and call one repository
//! per entity family with a [`Context`], receiving entities or a
//! [`RepositoryError`].

pub mod domain;
pub mod infrastructure;
pub mod models;

pub use domain::{Context, DomainError, ErrorKind, RepoResult, RepositoryError};
pub use infrastructure::Repositories;
pub use infrastructure::{config, db, seed};
