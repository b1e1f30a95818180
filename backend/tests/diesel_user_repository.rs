//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Every test gets a fresh database on a `pg-embedded-setup-unpriv` cluster
//! with the migrations applied. When the cluster cannot start the tests fail,
//! unless `SKIP_TEST_CLUSTER=1` turns the failure into a skip marker.

use std::sync::Arc;

use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

use seedling::domain::ports::{UserRepository, UsersCommand, UsersQuery};
use seedling::domain::{
    NewUser, SortDirection, User, UserListQuery, UserName, UserSeedService, UsersQueryService,
};
use seedling::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

mod support;

use support::{handle_cluster_setup_failure, migrated_database, test_cluster};

// Fields drop in order: the pool closes before its database is dropped, and
// the database goes before the cluster.
struct TestContext {
    repository: Arc<dyn UserRepository>,
    _database: TemporaryDatabase,
    _cluster: TestCluster,
    runtime: Runtime,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database = migrated_database(&cluster, &runtime)?;

    let config = PoolConfig::new(database.url())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        repository: Arc::new(DieselUserRepository::new(pool)),
        _database: database,
        _cluster: cluster,
        runtime,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn sally_query() -> UserListQuery {
    UserListQuery::all().named(UserName::new("Sally").expect("valid name"))
}

fn ages(users: &[User]) -> Vec<i32> {
    users.iter().map(|u| u.age().get()).collect()
}

#[rstest]
fn seed_and_list_round_trip(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: seed_and_list_round_trip skipped");
        return;
    };
    let repository = context.repository.clone();
    let seeder = UserSeedService::new(repository.clone());
    let query = UsersQueryService::new(repository.clone());

    context.runtime.block_on(async {
        let first = seeder.reset_and_seed().await.expect("first seed");
        assert_eq!(first.deleted, 0);
        assert_eq!(first.inserted.len(), 3);

        let all = repository
            .find_many(&UserListQuery::all())
            .await
            .expect("read all");
        assert_eq!(ages(&all), [12, 13, 25]);

        let page = query
            .list_users(&UserListQuery::default())
            .await
            .expect("default query");
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].email().as_str(), "sally@test1.com");
        assert_eq!(page[0].age().get(), 13);

        let both = query
            .list_users(&sally_query().with_skip(0).with_take(Some(2)))
            .await
            .expect("skip zero");
        assert_eq!(ages(&both), [12, 13]);

        let descending = query
            .list_users(&sally_query().with_direction(SortDirection::Descending))
            .await
            .expect("descending");
        assert_eq!(ages(&descending), [13, 12]);

        let none = query
            .list_users(&UserListQuery::default().named(UserName::new("Nonexistent").expect("name")))
            .await
            .expect("unknown name");
        assert!(none.is_empty());

        let beyond = query
            .list_users(&sally_query().with_skip(5))
            .await
            .expect("skip past end");
        assert!(beyond.is_empty());

        let second = seeder.reset_and_seed().await.expect("second seed");
        assert_eq!(second.deleted, 3);
        let after = repository
            .find_many(&UserListQuery::all())
            .await
            .expect("read all");
        assert_eq!(after.len(), 3);
        for user in &after {
            assert!(first.inserted.iter().all(|old| old.id() != user.id()));
        }
    });
}

#[rstest]
#[case(SortDirection::Ascending)]
#[case(SortDirection::Descending)]
fn equal_ages_keep_insertion_order(
    repo_context: Option<TestContext>,
    #[case] direction: SortDirection,
) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: equal_ages_keep_insertion_order skipped");
        return;
    };
    let repository = context.repository.clone();

    let listed = context.runtime.block_on(async {
        for (email, age) in [
            ("first@test.com", 30),
            ("young@test.com", 20),
            ("second@test.com", 30),
            ("third@test.com", 30),
        ] {
            let user = NewUser::try_from_parts("Ann", email, age).expect("valid user");
            repository.create(&user).await.expect("insert");
        }
        repository
            .find_many(&UserListQuery::all().with_direction(direction))
            .await
            .expect("list")
    });

    let emails: Vec<&str> = listed.iter().map(|u| u.email().as_str()).collect();
    let expected = match direction {
        SortDirection::Ascending => [
            "young@test.com",
            "first@test.com",
            "second@test.com",
            "third@test.com",
        ],
        SortDirection::Descending => [
            "first@test.com",
            "second@test.com",
            "third@test.com",
            "young@test.com",
        ],
    };
    assert_eq!(emails, expected);
}
