//! Mapping from user persistence failures to transport-safe domain errors.

use super::Error;
use super::ports::UserPersistenceError;

/// Unreachable stores become `service_unavailable`; anything else is an
/// internal error whose message adapters redact before responding.
pub(super) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}
