//! Demo users service.
//!
//! `POST /api/users` wipes the user store and inserts three sample rows;
//! `GET /api/users` returns one filtered, age-ordered page of them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
