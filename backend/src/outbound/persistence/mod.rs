//! PostgreSQL persistence via Diesel.
//!
//! `diesel-async` supplies non-blocking queries over a `bb8` pool. Row
//! structs and the table definition stay private to this module; callers
//! only see [`DieselUserRepository`] and the pool types.

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
