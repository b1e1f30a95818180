//! Driving port for the destructive reset-and-seed operation.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Result of a reset-and-seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Rows removed before seeding.
    pub deleted: usize,
    /// Records inserted, in insertion order.
    pub inserted: Vec<User>,
}

/// Domain use-case port for repopulating the user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Delete every user, then insert the fixed sample users in order.
    async fn reset_and_seed(&self) -> Result<SeedOutcome, Error>;
}
