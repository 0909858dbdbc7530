//! API routes module

pub mod health;

use axum::{routing::get, Json, Router};
use domain_users::{handlers, LoggerAdapter, UserRepository, UserService};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Create all API routes on top of the given user service
pub fn routes<R, L>(service: UserService<R, L>) -> Router
where
    R: UserRepository + 'static,
    L: LoggerAdapter + 'static,
{
    Router::new()
        .nest("/api/users", handlers::router(service))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(health::router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
