//! Blog service - the operations surface over the record store.
//!
//! Entity mutators are pure value transformations; this service performs
//! the writes through the repository ports. Each operation is one
//! synchronous call with at most one write; concurrent writers get
//! last-writer-wins semantics from the store.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::{CommentRepository, PostRepository};

#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Create and persist a new, unpublished post.
    ///
    /// Titles longer than 200 characters are rejected at save time.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        title: String,
        content: String,
    ) -> Result<Post, DomainError> {
        let post = Post::new(author_id, title, content);
        post.validate()?;
        Ok(self.posts.save(post).await?)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Publish a post, persisting the new timestamp.
    ///
    /// No preconditions: publishing an already published post simply
    /// overwrites the timestamp.
    pub async fn publish_post(&self, id: Uuid) -> Result<Post, DomainError> {
        let post = self.get_post(id).await?;
        Ok(self.posts.save(post.publish()).await?)
    }

    /// Delete a post together with all of its comments.
    pub async fn delete_post(&self, id: Uuid) -> Result<(), DomainError> {
        match self.posts.delete(id).await {
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "Post",
                id,
            }),
            other => Ok(other?),
        }
    }

    /// All posts written under the given author reference.
    pub async fn posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_author_id(author_id).await?)
    }

    /// Create and persist a new, unapproved comment.
    ///
    /// The owning post must exist; a comment never exists orphaned.
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        author: String,
        content: String,
    ) -> Result<Comment, DomainError> {
        self.get_post(post_id).await?;

        let comment = Comment::new(post_id, author, content);
        Ok(self.comments.save(comment).await?)
    }

    pub async fn get_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Comment",
                id,
            })
    }

    /// Approve a comment, persisting the flag. Idempotent.
    pub async fn approve_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        let comment = self.get_comment(id).await?;
        Ok(self.comments.save(comment.approve()).await?)
    }

    /// Delete a single comment. The owning post is untouched.
    pub async fn delete_comment(&self, id: Uuid) -> Result<(), DomainError> {
        match self.comments.delete(id).await {
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "Comment",
                id,
            }),
            other => Ok(other?),
        }
    }

    /// All comments attached to a post.
    pub async fn comments(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.get_post(post_id).await?;
        Ok(self.comments.find_by_post_id(post_id).await?)
    }

    /// Exactly the subset of a post's comments that have been approved.
    pub async fn approved_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.get_post(post_id).await?;
        Ok(self.comments.find_approved_by_post_id(post_id).await?)
    }
}
