//! PostgreSQL-backed `UserRepository` adapter.
//!
//! Each operation checks out its own connection; nothing here opens a
//! transaction, so a seeding run is a sequence of independent statements.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, SortDirection, User, UserId, UserListQuery};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over an existing pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use seedling::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/seedling")).await?;
    /// let repository = DieselUserRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserPersistenceError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => UserPersistenceError::query(info.message().to_owned()),
        other => UserPersistenceError::query(other.to_string()),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from(row).map_err(|err| UserPersistenceError::query(format!("invalid user row: {err}")))
}

fn to_sql_count(value: u32) -> i64 {
    i64::from(value)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn delete_all(&self) -> Result<usize, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(users::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow::from_domain(*UserId::random().as_uuid(), user);
        let stored: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_user(stored)
    }

    async fn find_many(&self, query: &UserListQuery) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut statement = users::table.select(UserRow::as_select()).into_boxed();
        if let Some(name) = &query.name {
            statement = statement.filter(users::name.eq(name.as_str().to_owned()));
        }
        statement = match query.direction {
            SortDirection::Ascending => statement.order_by((
                users::age.asc(),
                users::created_at.asc(),
                users::id.asc(),
            )),
            SortDirection::Descending => statement.order_by((
                users::age.desc(),
                users::created_at.asc(),
                users::id.asc(),
            )),
        };
        statement = statement.offset(to_sql_count(query.skip));
        if let Some(take) = query.take {
            statement = statement.limit(to_sql_count(take));
        }

        let rows: Vec<UserRow> = statement.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_user).collect()
    }
}
