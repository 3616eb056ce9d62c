//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and schema (db)
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Aggregate container (state)
//! - Demo data (seed)

pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod state;

pub use repositories::*;
pub use state::Repositories;
