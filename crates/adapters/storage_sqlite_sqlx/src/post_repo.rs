//! `SQLite` implementation of [`PostRepository`].
//!
//! Reads resolve the referenced category and user in the same query via
//! LEFT JOIN, so a post with dangling references still comes back — with
//! the association left unresolved.

use std::future::Future;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use miniblog_app::ports::PostRepository;
use miniblog_domain::category::Category;
use miniblog_domain::error::BlogError;
use miniblog_domain::id::{CategoryId, PostId, UserId};
use miniblog_domain::post::{NewPost, Post, PostDetail};
use miniblog_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting bare `posts` rows into domain [`Post`].
struct PostRow(Post);

impl<'r> FromRow<'r, SqliteRow> for PostRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let category_id: Option<i64> = row.try_get("category_id")?;
        let user_id: Option<i64> = row.try_get("user_id")?;

        Ok(Self(Post {
            id: PostId::from_i64(row.try_get("id")?),
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            category_id: category_id.map(CategoryId::from_i64),
            user_id: user_id.map(UserId::from_i64),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }
}

/// Wrapper for converting joined rows into [`PostDetail`].
struct DetailRow(PostDetail);

impl DetailRow {
    fn maybe(value: Option<Self>) -> Option<PostDetail> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for DetailRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let post = PostRow::from_row(row)?.0;

        // Every aliased column of an unresolved LEFT JOIN is NULL, so the
        // joined row id decides whether the association exists.
        let category = match row.try_get::<Option<i64>, _>("category_row_id")? {
            Some(id) => Some(Category {
                id: CategoryId::from_i64(id),
                name: row.try_get("category_name")?,
                created_at: row.try_get("category_created_at")?,
                updated_at: row.try_get("category_updated_at")?,
            }),
            None => None,
        };
        let user = match row.try_get::<Option<i64>, _>("user_row_id")? {
            Some(id) => Some(User {
                id: UserId::from_i64(id),
                name: row.try_get("user_name")?,
                created_at: row.try_get("user_created_at")?,
                updated_at: row.try_get("user_updated_at")?,
            }),
            None => None,
        };

        Ok(Self(PostDetail {
            post,
            category,
            user,
        }))
    }
}

const INSERT: &str = "INSERT INTO posts (title, body, category_id, user_id, created_at, updated_at) \
     VALUES (?, ?, ?, ?, ?, ?) RETURNING *";

const SELECT_DETAIL: &str = "SELECT p.id, p.title, p.body, p.category_id, p.user_id, p.created_at, p.updated_at, \
     c.id AS category_row_id, c.name AS category_name, \
     c.created_at AS category_created_at, c.updated_at AS category_updated_at, \
     u.id AS user_row_id, u.name AS user_name, \
     u.created_at AS user_created_at, u.updated_at AS user_updated_at \
     FROM posts p \
     LEFT JOIN categories c ON c.id = p.category_id \
     LEFT JOIN users u ON u.id = p.user_id";

const UPDATE: &str = "UPDATE posts SET title = ?, body = ?, category_id = ?, user_id = ?, updated_at = ? \
     WHERE id = ? RETURNING *";

const DELETE_BY_ID: &str = "DELETE FROM posts WHERE id = ?";

/// `SQLite`-backed post repository.
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PostRepository for SqlitePostRepository {
    fn create(&self, post: NewPost) -> impl Future<Output = Result<Post, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = Utc::now();
            let row: PostRow = sqlx::query_as(INSERT)
                .bind(&post.title)
                .bind(&post.body)
                .bind(post.category_id.map(CategoryId::as_i64))
                .bind(post.user_id.map(UserId::as_i64))
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
        id: PostId,
    ) -> impl Future<Output = Result<Option<PostDetail>, BlogError>> + Send {
        let pool = self.pool.clone();
        let query = format!("{SELECT_DETAIL} WHERE p.id = ?");
        async move {
            let row: Option<DetailRow> = sqlx::query_as(&query)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(DetailRow::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<PostDetail>, BlogError>> + Send {
        let pool = self.pool.clone();
        let query = format!("{SELECT_DETAIL} ORDER BY p.id");
        async move {
            let rows: Vec<DetailRow> = sqlx::query_as(&query)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, post: Post) -> impl Future<Output = Result<Post, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: PostRow = sqlx::query_as(UPDATE)
                .bind(&post.title)
                .bind(&post.body)
                .bind(post.category_id.map(CategoryId::as_i64))
                .bind(post.user_id.map(UserId::as_i64))
                .bind(Utc::now())
                .bind(post.id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn delete(&self, id: PostId) -> impl Future<Output = Result<(), BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
