//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised without I/O.

use std::sync::Arc;

use crate::domain::UserListQuery;
use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for the users handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_query: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    /// Listing parameters applied by `GET /api/users`.
    pub list_query: UserListQuery,
}

impl HttpState {
    /// Bundle the ports with the canonical listing query.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
            list_query: UserListQuery::default(),
        }
    }

    #[must_use]
    pub fn with_list_query(mut self, list_query: UserListQuery) -> Self {
        self.list_query = list_query;
        self
    }
}
