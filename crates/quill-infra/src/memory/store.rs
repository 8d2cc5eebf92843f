//! In-memory record store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Comment, Post};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, CommentRepository, PostRepository};

/// Backing tables. Rows are kept in insertion order.
///
/// Both repositories share one set of tables so that deleting a post can
/// cascade into the comments table under a single write lock.
#[derive(Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

/// Shared in-memory record store backed by an async `RwLock`.
///
/// Each repository call is one atomic read-modify-write under the lock;
/// concurrent saves of the same row resolve last-writer-wins.
/// Note: data is lost on process restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository view over the posts table.
    pub fn posts(&self) -> MemoryPostRepository {
        MemoryPostRepository {
            store: self.clone(),
        }
    }

    /// Repository view over the comments table.
    pub fn comments(&self) -> MemoryCommentRepository {
        MemoryCommentRepository {
            store: self.clone(),
        }
    }
}

/// In-memory post repository.
#[derive(Clone)]
pub struct MemoryPostRepository {
    store: MemoryStore,
}

#[async_trait]
impl BaseRepository<Post, Uuid> for MemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.posts.iter_mut().find(|p| p.id == entity.id) {
            Some(row) => *row = entity.clone(),
            None => tables.posts.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(RepoError::NotFound);
        }

        // Cascade: comments never outlive their post.
        tables.comments.retain(|c| c.post_id != id);
        tracing::debug!(%id, "Deleted post and cascaded its comments");

        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_author_id(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }
}

/// In-memory comment repository.
#[derive(Clone)]
pub struct MemoryCommentRepository {
    store: MemoryStore,
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for MemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.comments.iter_mut().find(|c| c.id == entity.id) {
            Some(row) => *row = entity.clone(),
            None => tables.comments.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_approved_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.approved)
            .cloned()
            .collect())
    }
}
