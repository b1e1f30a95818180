//! Destructive reset of the user store to the fixed sample rows.
//!
//! Every run deletes all records before inserting. The steps are awaited one
//! after another with no surrounding transaction, so a failed insert leaves
//! the rows created before it in place.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::persistence_error_mapping::map_user_persistence_error;
use super::ports::{SeedOutcome, UserRepository, UsersCommand};
use super::{Error, NewUser, UserValidationError};

const SAMPLE_USERS: [(&str, &str, i32); 3] = [
    ("Kyle", "kyle@test.com", 25),
    ("Sally", "sally@test.com", 12),
    ("Sally", "sally@test1.com", 13),
];

/// The fixed sample users, in insertion order.
///
/// # Examples
/// ```
/// use seedling::domain::sample_users;
///
/// let users = sample_users().expect("sample data is valid");
/// assert_eq!(users.len(), 3);
/// assert_eq!(users[0].email.as_str(), "kyle@test.com");
/// ```
pub fn sample_users() -> Result<Vec<NewUser>, UserValidationError> {
    SAMPLE_USERS
        .iter()
        .map(|&(name, email, age)| NewUser::try_from_parts(name, email, age))
        .collect()
}

/// [`UsersCommand`] implementation backed by any [`UserRepository`].
#[derive(Clone)]
pub struct UserSeedService {
    repository: Arc<dyn UserRepository>,
}

impl UserSeedService {
    /// Create a seeding service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersCommand for UserSeedService {
    async fn reset_and_seed(&self) -> Result<SeedOutcome, Error> {
        let users = sample_users()
            .map_err(|err| Error::internal(format!("invalid sample user: {err}")))?;

        let deleted = self
            .repository
            .delete_all()
            .await
            .map_err(map_user_persistence_error)?;

        let mut inserted = Vec::with_capacity(users.len());
        for user in &users {
            let created = self
                .repository
                .create(user)
                .await
                .map_err(map_user_persistence_error)?;
            inserted.push(created);
        }

        info!(deleted, inserted = inserted.len(), "user store reset and seeded");
        Ok(SeedOutcome { deleted, inserted })
    }
}
