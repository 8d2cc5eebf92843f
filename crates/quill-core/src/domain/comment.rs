use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - attached to exactly one post.
///
/// `author` is a free-text display name; no identity verification happens
/// here. Comments start out unapproved and are hidden from the approved
/// listing until moderated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

impl Comment {
    /// Create a new, unapproved comment on the given post.
    pub fn new(post_id: Uuid, author: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author,
            content,
            created_at: Utc::now(),
            approved: false,
        }
    }

    /// Mark the comment as approved. Idempotent.
    ///
    /// Pure value transformation; persisting the result is the caller's job.
    pub fn approve(mut self) -> Self {
        self.approved = true;
        self
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
