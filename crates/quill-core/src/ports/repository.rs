use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with domain-specific methods.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts written under the given external author reference.
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
///
/// Listing order is store-defined; both backends return insertion order.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// All comments attached to a post.
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Only the approved comments attached to a post.
    async fn find_approved_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}
