//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use miniblog_app::ports::{CategoryRepository, PostRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, UR, CR>(state: AppState<PR, UR, CR>) -> Router
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /` — fixed greeting kept from the original API surface.
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "welcome to v1" }))
}
