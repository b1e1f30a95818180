//! Users API handlers.
//!
//! ```text
//! GET  /api/users   -> [{"id": "...", "name": "Sally", "email": "sally@test1.com", "age": 13}]
//! POST /api/users   -> {"message": "Users created"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Acknowledgement message returned after seeding.
pub const USERS_CREATED_MESSAGE: &str = "Users created";

/// Response body for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersCreatedResponse {
    #[schema(example = "Users created")]
    pub message: String,
}

impl Default for UsersCreatedResponse {
    fn default() -> Self {
        Self {
            message: USERS_CREATED_MESSAGE.to_owned(),
        }
    }
}

/// List users with the server's configured filter, ordering and page.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use seedling::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Matching users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users(&state.list_query).await?;
    Ok(web::Json(users))
}

/// Delete every user and insert the sample rows.
///
/// Destructive: existing records are removed without confirmation. Any
/// request body is ignored.
#[utoipa::path(
    post,
    path = "/api/users",
    responses(
        (status = 200, description = "Store reset and seeded", body = UsersCreatedResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUsers"
)]
#[post("/users")]
pub async fn create_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersCreatedResponse>> {
    let outcome = state.users_command.reset_and_seed().await?;
    info!(
        deleted = outcome.deleted,
        inserted = outcome.inserted.len(),
        "POST /api/users handled"
    );
    Ok(web::Json(UsersCreatedResponse::default()))
}
