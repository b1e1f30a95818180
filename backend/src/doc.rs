//! OpenAPI document for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UsersCreatedResponse;

/// OpenAPI description of the users and health endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Seedling API",
        description = "Reset-and-seed plus a fixed filtered listing over a users table."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, ErrorCodeSchema, UsersCreatedResponse)),
    tags(
        (name = "users", description = "Seeding and listing users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
