//! API module
//!
//! HTTP adapter over the account service.

pub mod middleware;
pub mod routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::service::AccountService;

pub use routes::create_router;

/// Build the application router
pub fn build_router(service: AccountService) -> Router {
    // Runs inside the request-id layers below, so the id is already set
    let bank_routes = create_router().layer(axum::middleware::from_fn(
        middleware::logging_middleware,
    ));

    Router::new()
        // Health check
        .route("/health", axum::routing::get(health_check))
        .nest("/api/bank", bank_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(service)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
