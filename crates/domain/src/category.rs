//! Category — a grouping that posts can reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::CategoryId;

/// A stored category row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating a [`Category`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCategory {
    pub name: String,
}
