// Library root - router and state exported for main and for tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod services;

pub use config::Config;
pub use error::ApiError;
pub use services::{EventRepository, Outbox};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

#[derive(Clone)]
pub struct AppState {
    pub repo: EventRepository,
    pub outbox: Outbox,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, EventRepository::new())
    }

    pub fn with_repository(config: Config, repo: EventRepository) -> Self {
        Self {
            repo,
            outbox: Outbox::new(),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::event_list))
        .route("/health", get(health_check))
        .route("/event/:id/", get(handlers::event_detail))
        .route("/event/:id/register/", post(handlers::register))
        .route("/confirmation/", get(handlers::confirmation))
        .route(
            "/admin/events",
            get(handlers::admin::list_events).post(handlers::admin::create_event),
        )
        .route("/admin/registrations", get(handlers::admin::list_registrations))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                // The client page may be served from another origin (dx serve).
                .layer(tower_http::cors::CorsLayer::permissive())
                .layer(axum::middleware::from_fn(
                    middleware::security_headers_middleware,
                )),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
