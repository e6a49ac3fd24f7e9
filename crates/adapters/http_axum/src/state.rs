//! Shared application state for axum handlers.

use std::sync::Arc;

use miniblog_app::ports::{CategoryRepository, PostRepository, UserRepository};
use miniblog_app::services::category_service::CategoryService;
use miniblog_app::services::post_service::PostService;
use miniblog_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, UR, CR> {
    /// Post CRUD service.
    pub post_service: Arc<PostService<PR>>,
    /// User service.
    pub user_service: Arc<UserService<UR>>,
    /// Category service.
    pub category_service: Arc<CategoryService<CR>>,
}

impl<PR, UR, CR> Clone for AppState<PR, UR, CR> {
    fn clone(&self) -> Self {
        Self {
            post_service: Arc::clone(&self.post_service),
            user_service: Arc::clone(&self.user_service),
            category_service: Arc::clone(&self.category_service),
        }
    }
}

impl<PR, UR, CR> AppState<PR, UR, CR>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        post_service: PostService<PR>,
        user_service: UserService<UR>,
        category_service: CategoryService<CR>,
    ) -> Self {
        Self {
            post_service: Arc::new(post_service),
            user_service: Arc::new(user_service),
            category_service: Arc::new(category_service),
        }
    }
}
