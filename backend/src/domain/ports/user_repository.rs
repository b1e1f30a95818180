//! Driven port for user persistence.
//!
//! The three operations mirror what the seeder and the query service need
//! from a store: bulk delete, single insert and a filtered, ordered, paged
//! read. Adapters push the [`UserListQuery`] down to their backend.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserListQuery};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Delete every user record, returning how many rows were removed.
    async fn delete_all(&self) -> Result<usize, UserPersistenceError>;

    /// Insert a record; the store assigns its identifier.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Read records matching `query` in its order and page window.
    async fn find_many(&self, query: &UserListQuery) -> Result<Vec<User>, UserPersistenceError>;
}
