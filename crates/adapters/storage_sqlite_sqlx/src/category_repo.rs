//! `SQLite` implementation of [`CategoryRepository`].

use std::future::Future;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use miniblog_app::ports::CategoryRepository;
use miniblog_domain::category::{Category, NewCategory};
use miniblog_domain::error::BlogError;
use miniblog_domain::id::CategoryId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Category`].
struct Wrapper(Category);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Category> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Category {
            id: CategoryId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO categories (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM categories ORDER BY id";

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = Utc::now();
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&category.name)
                .bind(now)
                .bind(now)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteCategoryRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteCategoryRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_category() {
        let repo = setup().await;
        let created = repo
            .create(NewCategory {
                name: "rust".to_string(),
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_category_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(CategoryId::from_i64(42)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_categories_in_id_order() {
        let repo = setup().await;
        repo.create(NewCategory {
            name: "rust".to_string(),
        })
        .await
        .unwrap();
        repo.create(NewCategory {
            name: "go".to_string(),
        })
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["rust", "go"]);
    }
}
