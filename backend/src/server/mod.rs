//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::io;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::UserRepository;
use crate::domain::{UserListQuery, UserSeedService, UsersQueryService};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::index::index;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_users, list_users};
use crate::outbound::memory::InMemoryUserRepository;
use crate::outbound::persistence::{DbPool, DieselUserRepository};

/// Pick the user store: PostgreSQL when a pool is configured, process memory
/// otherwise.
pub fn build_user_repository(db_pool: Option<&DbPool>) -> Arc<dyn UserRepository> {
    match db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => {
            warn!("no database configured; users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// Wire both domain services over one repository.
pub fn build_http_state(
    repository: Arc<dyn UserRepository>,
    list_query: UserListQuery,
) -> HttpState {
    HttpState::new(
        Arc::new(UsersQueryService::new(repository.clone())),
        Arc::new(UserSeedService::new(repository)),
    )
    .with_list_query(list_query)
}

/// Shared application data cloned into each worker.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Assemble routes, shared state and middleware.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api").service(list_users).service(create_users);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
        .service(index);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind an Actix server and mark the service ready.
///
/// Actix's own signal handling is disabled; pair the server with
/// [`shutdown_signal`] and [`drain`] so liveness fails before the stop.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        list_query,
    } = config;
    let repository = build_user_repository(db_pool.as_ref());
    let http_state = web::Data::new(build_http_state(repository, list_query));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "server listening");
    Ok(server)
}

/// Resolve once the process receives SIGINT or, on Unix, SIGTERM.
///
/// # Errors
/// Returns [`std::io::Error`] when the signal handlers cannot be installed.
pub async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Fail liveness probes, then stop the server once in-flight requests finish.
pub async fn drain(health_state: &HealthState, handle: &ServerHandle) {
    health_state.mark_unhealthy();
    info!("draining server");
    handle.stop(true).await;
}
