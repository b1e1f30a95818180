//! Domain service answering user listing queries from a repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::persistence_error_mapping::map_user_persistence_error;
use super::ports::{UserRepository, UsersQuery};
use super::{Error, User, UserListQuery, UserName};

/// [`UsersQuery`] implementation backed by any [`UserRepository`].
#[derive(Clone)]
pub struct UsersQueryService {
    repository: Arc<dyn UserRepository>,
}

impl UsersQueryService {
    /// Create a query service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersQuery for UsersQueryService {
    async fn list_users(&self, query: &UserListQuery) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .find_many(query)
            .await
            .map_err(map_user_persistence_error)?;
        debug!(
            name = query.name.as_ref().map(UserName::as_str),
            direction = %query.direction,
            skip = query.skip,
            take = query.take,
            returned = users.len(),
            "listed users"
        );
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockUserRepository, UserPersistenceError};
    use mockall::predicate::eq;
    use rstest::rstest;
    use uuid::Uuid;

    fn sally() -> User {
        User::try_from_parts(Uuid::new_v4(), "Sally", "sally@test1.com", 13).expect("valid user")
    }

    #[rstest]
    #[tokio::test]
    async fn forwards_query_to_repository() {
        let expected = vec![sally()];
        let returned = expected.clone();
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_many()
            .with(eq(UserListQuery::default()))
            .times(1)
            .return_once(move |_| Ok(returned));
        let service = UsersQueryService::new(Arc::new(repository));

        let users = service
            .list_users(&UserListQuery::default())
            .await
            .expect("query succeeds");

        assert_eq!(users, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_many()
            .return_once(|_| Ok(Vec::new()));
        let service = UsersQueryService::new(Arc::new(repository));

        let users = service
            .list_users(&UserListQuery::default())
            .await
            .expect("query succeeds");

        assert!(users.is_empty());
    }

    #[rstest]
    #[case(UserPersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("bad sql"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn maps_repository_failures(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_many()
            .return_once(move |_| Err(failure));
        let service = UsersQueryService::new(Arc::new(repository));

        let err = service
            .list_users(&UserListQuery::default())
            .await
            .expect_err("failure propagates");

        assert_eq!(err.code(), expected);
    }
}
