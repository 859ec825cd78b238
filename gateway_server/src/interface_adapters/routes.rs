use crate::interface_adapters::handlers::{health, proxy};
use crate::interface_adapters::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers. The supported verbs share the
    // proxy handler (get also answers HEAD); anything else is 405.
    Router::new()
        .route(
            "/api/{*path}",
            get(proxy)
                .post(proxy)
                .put(proxy)
                .patch(proxy)
                .delete(proxy),
        )
        .route("/health", get(health))
        .with_state(state)
}
