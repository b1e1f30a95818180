//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::domain::UserListQuery;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) list_query: UserListQuery,
}

impl ServerConfig {
    /// Listen on `bind_addr` with the in-memory store and the canonical query.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            list_query: UserListQuery::default(),
        }
    }

    /// Back the user ports with PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the parameters used by `GET /api/users`.
    #[must_use]
    pub fn with_list_query(mut self, list_query: UserListQuery) -> Self {
        self.list_query = list_query;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
