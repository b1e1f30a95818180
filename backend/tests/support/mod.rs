//! Shared helpers for integration tests that need PostgreSQL.
//!
//! Each suite boots an embedded cluster through [`pg_embed::test_cluster`]
//! and provisions a throwaway database with the schema applied.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::{migrated_database, test_cluster};
