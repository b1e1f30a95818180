//! `UserRepository` held in process memory.
//!
//! Records live in a vector in insertion order and queries run through
//! [`UserListQuery::apply`], matching the ordering the SQL adapter produces.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId, UserListQuery};

/// Volatile repository; contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.records
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user store is poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn delete_all(&self) -> Result<usize, UserPersistenceError> {
        let mut records = self.records()?;
        let deleted = records.len();
        records.clear();
        Ok(deleted)
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let stored = user.clone().into_user(UserId::random());
        self.records()?.push(stored.clone());
        Ok(stored)
    }

    async fn find_many(&self, query: &UserListQuery) -> Result<Vec<User>, UserPersistenceError> {
        Ok(query.apply(self.records()?.iter()))
    }
}
