//! Domain primitives, ports and services.
//!
//! Purpose: hold the user record, its listing query and the two use-cases
//! (reset-and-seed, list) free of HTTP and database concerns.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, NewUser and their validated components.
//! - UserListQuery / SortDirection: filter, order and page parameters.
//! - UsersQueryService / UserSeedService: use-cases over a `UserRepository`.

pub mod error;
mod persistence_error_mapping;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_query;
pub mod user_seed_service;
pub mod users_query_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Age, Email, NewUser, User, UserId, UserName, UserValidationError};
pub use self::user_query::{
    DEFAULT_FILTER_NAME, DEFAULT_SKIP, DEFAULT_TAKE, ParseSortDirectionError, SortDirection,
    UserListQuery,
};
pub use self::user_seed_service::{UserSeedService, sample_users};
pub use self::users_query_service::UsersQueryService;
