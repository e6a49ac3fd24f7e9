//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BlogError`]
//! at the boundary. No `String` variants.

/// A lookup matched no row.
///
/// The `Display` output is exactly what API clients see in error bodies
/// (e.g. `post not found`), so `id` is kept as a separate field for logs.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Entity name as it appears in error bodies (`"post"`, `"user"`, …).
    pub entity: &'static str,
    /// The identifier that failed to match.
    pub id: String,
}

/// Base error enum shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// A requested row does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
