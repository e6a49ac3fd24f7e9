//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod posts;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, post};

use miniblog_app::ports::{CategoryRepository, PostRepository, UserRepository};

use crate::state::AppState;

/// Build the API sub-router.
///
/// The path shapes are part of the inherited contract: the posts collection
/// lives at `/posts/` (trailing slash), while users and categories list at
/// the bare path but create at the trailing-slash path.
pub fn routes<PR, UR, CR>() -> Router<AppState<PR, UR, CR>>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    Router::new()
        // Posts
        .route(
            "/posts/",
            get(posts::list::<PR, UR, CR>).post(posts::create::<PR, UR, CR>),
        )
        .route(
            "/posts/{id}",
            get(posts::get::<PR, UR, CR>)
                .put(posts::update::<PR, UR, CR>)
                .delete(posts::delete::<PR, UR, CR>),
        )
        // Users
        .route("/users", get(users::list::<PR, UR, CR>))
        .route("/users/", post(users::create::<PR, UR, CR>))
        .route("/users/{id}", get(users::get::<PR, UR, CR>))
        // Categories
        .route("/categories", get(categories::list::<PR, UR, CR>))
        .route("/categories/", post(categories::create::<PR, UR, CR>))
        .route("/categories/{id}", get(categories::get::<PR, UR, CR>))
}
