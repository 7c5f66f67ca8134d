//! Router assembly.

mod books;
mod health;

pub use books::{book_routes, page_routes};
pub use health::health_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Form bodies are a few short text fields.
const BODY_LIMIT: usize = 64 * 1024;

/// The full application: pages, book CRUD, health and readiness.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(book_routes(state.clone()))
        .merge(health_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
