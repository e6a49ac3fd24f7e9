//! # miniblog-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `miniblog-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the schema at startup (sqlx embedded migrations, idempotent)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `miniblog-app` (for port traits) and `miniblog-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;

mod category_repo;
mod post_repo;
mod user_repo;

pub use category_repo::SqliteCategoryRepository;
pub use pool::{Config, Database};
pub use post_repo::SqlitePostRepository;
pub use user_repo::SqliteUserRepository;
