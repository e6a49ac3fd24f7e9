//! Category service — use-cases for managing categories.

use miniblog_domain::category::{Category, NewCategory};
use miniblog_domain::error::{BlogError, NotFoundError};
use miniblog_domain::id::CategoryId;

use crate::ports::CategoryRepository;

/// Application service for category operations.
pub struct CategoryService<R> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new category. No field validation.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_category(&self, category: NewCategory) -> Result<Category, BlogError> {
        self.repo.create(category).await
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, BlogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "category",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_categories(&self) -> Result<Vec<Category>, BlogError> {
        self.repo.get_all().await
    }
}
