//! Storage port — repository traits for persistence.

use std::future::Future;

use miniblog_domain::category::{Category, NewCategory};
use miniblog_domain::error::BlogError;
use miniblog_domain::id::{CategoryId, PostId, UserId};
use miniblog_domain::post::{NewPost, Post, PostDetail};
use miniblog_domain::user::{NewUser, User};

/// Persistence operations for posts.
pub trait PostRepository {
    /// Insert a new row, returning it with store-assigned id and timestamps.
    fn create(&self, post: NewPost) -> impl Future<Output = Result<Post, BlogError>> + Send;

    /// Fetch one post with its category and user resolved.
    fn get_by_id(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<PostDetail>, BlogError>> + Send;

    /// Fetch all posts with categories and users resolved, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<PostDetail>, BlogError>> + Send;

    /// Overwrite an existing row, refreshing `updated_at`.
    fn update(&self, post: Post) -> impl Future<Output = Result<Post, BlogError>> + Send;

    /// Delete a row. Deleting an absent id is not an error at this level;
    /// existence checks belong to the service.
    fn delete(&self, id: PostId) -> impl Future<Output = Result<(), BlogError>> + Send;
}

/// Persistence operations for users.
pub trait UserRepository {
    /// Insert a new row, returning it with store-assigned id and timestamps.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, BlogError>> + Send;

    /// Fetch one user by id.
    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, BlogError>> + Send;

    /// Fetch all users, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, BlogError>> + Send;
}

/// Persistence operations for categories.
pub trait CategoryRepository {
    /// Insert a new row, returning it with store-assigned id and timestamps.
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, BlogError>> + Send;

    /// Fetch one category by id.
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, BlogError>> + Send;

    /// Fetch all categories, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, BlogError>> + Send;
}
