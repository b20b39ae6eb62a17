mod auth;
mod quotes;

pub use auth::SESSION_COOKIE;

use axum::Router;
use quoteboard_app::AppContext;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/quotes", quotes::router())
        // Mirrors the request origin so cookies work cross-site.
        .layer(CorsLayer::very_permissive())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .with_state(ctx)
}
