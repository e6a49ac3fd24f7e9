//! Post — a blog entry referencing its author and category.
//!
//! The references are logical only: a post may point at a user or category
//! that does not exist, and nothing in the domain layer rejects that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::id::{CategoryId, PostId, UserId};
use crate::user::User;

/// A stored post row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub category_id: Option<CategoryId>,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Merge a patch onto this post. Absent fields keep their stored value.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = Some(user_id);
        }
    }
}

/// Client-supplied fields for creating a [`Post`].
///
/// Missing fields fall back to their defaults and unknown fields are
/// ignored; the store assigns the id and timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub category_id: Option<CategoryId>,
    pub user_id: Option<UserId>,
}

/// Partial overwrite for updating a [`Post`].
///
/// Serde cannot tell `null` from an absent field here, so `null` references
/// are treated as "keep the stored value" rather than clearing it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<CategoryId>,
    pub user_id: Option<UserId>,
}

/// A post with its referenced category and user resolved in the same query.
///
/// Unresolved references serialize as `null` while the raw foreign keys
/// round-trip unchanged through the flattened [`Post`].
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub category: Option<Category>,
    pub user: Option<User>,
}
