//! Post service — use-cases for managing posts.

use miniblog_domain::error::{BlogError, NotFoundError};
use miniblog_domain::id::PostId;
use miniblog_domain::post::{NewPost, Post, PostDetail, PostPatch};

use crate::ports::PostRepository;

fn not_found(id: PostId) -> BlogError {
    NotFoundError {
        entity: "post",
        id: id.to_string(),
    }
    .into()
}

/// Application service for post CRUD operations.
pub struct PostService<R> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new post. No field validation; dangling category or user
    /// references are stored as given.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_post(&self, post: NewPost) -> Result<Post, BlogError> {
        let created = self.repo.create(post).await?;
        tracing::debug!(id = %created.id, "post created");
        Ok(created)
    }

    /// Look up a post by id with its associations resolved.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_post(&self, id: PostId) -> Result<PostDetail, BlogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all posts with their associations resolved.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_posts(&self) -> Result<Vec<PostDetail>, BlogError> {
        self.repo.get_all().await
    }

    /// Merge `patch` onto the stored post and save it.
    ///
    /// A missing id aborts before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_post(&self, id: PostId, patch: PostPatch) -> Result<Post, BlogError> {
        let detail = self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let mut post = detail.post;
        post.apply(patch);
        self.repo.update(post).await
    }

    /// Delete a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_post(&self, id: PostId) -> Result<(), BlogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        self.repo.delete(id).await?;
        tracing::debug!(%id, "post deleted");
        Ok(())
    }
}
