//! Driving port for listing users.
//!
//! Inbound adapters call this port with a fully-formed [`UserListQuery`];
//! none of the filter, order or page parameters come from the client.

use async_trait::async_trait;

use crate::domain::{Error, User, UserListQuery};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the users selected by `query`. No match is an empty list.
    async fn list_users(&self, query: &UserListQuery) -> Result<Vec<User>, Error>;
}
