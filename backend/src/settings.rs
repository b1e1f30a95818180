//! Service settings loaded via OrthoConfig.
//!
//! Defaults start the demo with its canonical listing query on
//! `0.0.0.0:8080` backed by the in-memory store.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{
    DEFAULT_FILTER_NAME, DEFAULT_SKIP, DEFAULT_TAKE, ParseSortDirectionError, SortDirection,
    UserListQuery, UserName, UserValidationError,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised when settings do not describe a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        /// The configured text.
        value: String,
        #[source]
        source: AddrParseError,
    },
    /// `pool_max_size` is zero.
    #[error("pool max size must be greater than zero")]
    PoolMaxSize,
    /// `filter_name` is blank.
    #[error("invalid filter name: {0}")]
    FilterName(#[from] UserValidationError),
    /// `sort_direction` is neither `asc` nor `desc`.
    #[error(transparent)]
    SortDirection(#[from] ParseSortDirectionError),
}

/// Settings for the HTTP server, the user store and the listing query.
///
/// Environment variables use the `SEEDLING_` prefix, for example
/// `SEEDLING_DATABASE_URL` or `SEEDLING_SORT_DIRECTION`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEEDLING")]
pub struct AppSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL URL. Without it users live in process memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
    /// Exact name matched by `GET /api/users`.
    #[ortho_config(default = DEFAULT_FILTER_NAME.to_owned())]
    pub filter_name: String,
    /// `asc` or `desc` ordering by age.
    #[ortho_config(default = SortDirection::Ascending.as_str().to_owned())]
    pub sort_direction: String,
    /// Matching rows skipped before the page.
    #[ortho_config(default = DEFAULT_SKIP)]
    pub skip: u32,
    /// Rows returned at most.
    #[ortho_config(default = DEFAULT_TAKE)]
    pub take: u32,
}

impl AppSettings {
    /// Parse the listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::BindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// The database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, rejected when zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::PoolMaxSize),
            size => Ok(size),
        }
    }

    /// Validate the listing settings into a [`UserListQuery`].
    pub fn user_list_query(&self) -> Result<UserListQuery, SettingsError> {
        let name = UserName::new(self.filter_name.as_str())?;
        let direction: SortDirection = self.sort_direction.parse()?;
        Ok(UserListQuery::all()
            .named(name)
            .with_direction(direction)
            .with_skip(self.skip)
            .with_take(Some(self.take)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "SEEDLING_BIND_ADDR",
        "SEEDLING_DATABASE_URL",
        "SEEDLING_POOL_MAX_SIZE",
        "SEEDLING_FILTER_NAME",
        "SEEDLING_SORT_DIRECTION",
        "SEEDLING_SKIP",
        "SEEDLING_TAKE",
    ];

    fn env_with(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|&var| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| *key == var)
                    .map(|(_, value)| (*value).to_owned());
                (var, value)
            })
            .collect()
    }

    fn load() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("seedling")]).expect("config should load")
    }

    #[rstest]
    fn defaults_reproduce_the_demo() {
        let _guard = lock_env(env_with(&[]));

        let settings = load();

        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size().expect("default size"), 10);
        assert_eq!(
            settings.user_list_query().expect("valid query"),
            UserListQuery::default()
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("SEEDLING_BIND_ADDR", "127.0.0.1:9000"),
            ("SEEDLING_DATABASE_URL", "postgres://localhost/seedling"),
            ("SEEDLING_POOL_MAX_SIZE", "3"),
            ("SEEDLING_FILTER_NAME", "Kyle"),
            ("SEEDLING_SORT_DIRECTION", "desc"),
            ("SEEDLING_SKIP", "0"),
            ("SEEDLING_TAKE", "5"),
        ]));

        let settings = load();
        let query = settings.user_list_query().expect("valid query");

        assert_eq!(
            settings.bind_addr().expect("address parses"),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/seedling"));
        assert_eq!(settings.pool_max_size().expect("valid size"), 3);
        assert_eq!(query.name.as_ref().map(UserName::as_str), Some("Kyle"));
        assert_eq!(query.direction, SortDirection::Descending);
        assert_eq!((query.skip, query.take), (0, Some(5)));
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(env_with(&[("SEEDLING_DATABASE_URL", "  ")]));
        assert_eq!(load().database_url(), None);
    }

    #[rstest]
    #[case("SEEDLING_SORT_DIRECTION", "sideways")]
    #[case("SEEDLING_FILTER_NAME", "   ")]
    fn invalid_listing_settings_are_rejected(#[case] var: &str, #[case] value: &str) {
        let _guard = lock_env(env_with(&[(var, value)]));
        assert!(load().user_list_query().is_err());
    }

    #[rstest]
    fn invalid_bind_addr_is_rejected() {
        let _guard = lock_env(env_with(&[("SEEDLING_BIND_ADDR", "not-an-address")]));
        let err = load().bind_addr().expect_err("address is invalid");
        assert!(err.to_string().contains("not-an-address"));
    }

    #[rstest]
    fn loads_without_any_input() {
        let _guard = lock_env(env_with(&[]));

        let settings = AppSettings::load_from_iter([OsString::from("seedling")])
            .expect("defaults alone form a complete configuration");

        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(settings.filter_name, DEFAULT_FILTER_NAME);
        assert_eq!(settings.sort_direction, "asc");
        assert_eq!((settings.skip, settings.take), (DEFAULT_SKIP, DEFAULT_TAKE));
    }

    #[rstest]
    fn zero_pool_size_is_rejected() {
        let _guard = lock_env(env_with(&[("SEEDLING_POOL_MAX_SIZE", "0")]));
        let err = load().pool_max_size().expect_err("zero is unusable");
        assert!(matches!(err, SettingsError::PoolMaxSize));
    }
}
