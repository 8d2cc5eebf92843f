use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum title length, mirrored by the varchar width in the relational
/// backend.
pub const MAX_TITLE_LEN: usize = 200;

/// Post entity - a blog post written under an external author identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new, unpublished post.
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            created_at: Utc::now(),
            published_at: None,
        }
    }

    /// Mark the post as published right now.
    ///
    /// Pure value transformation; persisting the result is the caller's job.
    /// Re-publishing overwrites the previous timestamp. The timestamp never
    /// precedes `created_at`.
    pub fn publish(mut self) -> Self {
        self.published_at = Some(Utc::now().max(self.created_at));
        self
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Field constraints enforced at save time.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title exceeds {MAX_TITLE_LEN} characters"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn sample() -> Post {
        Post::new(Uuid::new_v4(), "Hello".to_owned(), "World".to_owned())
    }

    #[test]
    fn new_post_is_unpublished() {
        let post = sample();
        assert!(post.published_at.is_none());
        assert!(!post.is_published());
    }

    #[test]
    fn publish_sets_timestamp_after_creation() {
        let post = sample().publish();

        let published = post.published_at.expect("publish must set the timestamp");
        assert!(published >= post.created_at);
    }

    #[test]
    fn republish_overwrites_timestamp() {
        let once = sample().publish();
        let first = once.published_at.unwrap();

        let twice = once.publish();
        let second = twice.published_at.unwrap();

        assert!(second >= first);
        assert!(twice.is_published());
    }

    #[test]
    fn publish_never_precedes_created_at() {
        let mut post = sample();
        post.created_at = Utc::now() + Duration::hours(1);

        let post = post.publish();
        assert_eq!(post.published_at, Some(post.created_at));
    }

    #[test]
    fn display_is_the_title() {
        let post = sample();
        assert_eq!(post.to_string(), "Hello");
    }

    #[test]
    fn title_at_limit_is_valid() {
        let mut post = sample();
        post.title = "x".repeat(MAX_TITLE_LEN);
        assert!(post.validate().is_ok());
    }

    #[test]
    fn title_over_limit_is_rejected() {
        let mut post = sample();
        post.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            post.validate(),
            Err(DomainError::Validation(_))
        ));
    }
}
