#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use quill_core::error::DomainError;
    use quill_core::ports::CommentRepository;
    use quill_core::service::BlogService;

    use crate::memory::MemoryStore;

    fn blog() -> (BlogService, MemoryStore) {
        let store = MemoryStore::new();
        let service = BlogService::new(Arc::new(store.posts()), Arc::new(store.comments()));
        (service, store)
    }

    #[tokio::test]
    async fn test_publish_sets_timestamp() {
        let (blog, _) = blog();
        let author = Uuid::new_v4();

        let post = blog
            .create_post(author, "Hello".to_owned(), "World".to_owned())
            .await
            .unwrap();
        assert!(post.published_at.is_none());

        let published = blog.publish_post(post.id).await.unwrap();
        let stamp = published.published_at.expect("publish must persist a timestamp");
        assert!(stamp >= published.created_at);

        // The write went through the store, not just the returned value.
        let reloaded = blog.get_post(post.id).await.unwrap();
        assert_eq!(reloaded.published_at, published.published_at);
    }

    #[tokio::test]
    async fn test_approval_controls_listing() {
        let (blog, _) = blog();
        let author = Uuid::new_v4();

        let post = blog
            .create_post(author, "Hello".to_owned(), "World".to_owned())
            .await
            .unwrap();

        let comment = blog
            .create_comment(post.id, "Alice".to_owned(), "Nice!".to_owned())
            .await
            .unwrap();
        assert!(!comment.approved);
        assert!(blog.approved_comments(post.id).await.unwrap().is_empty());

        let approved = blog.approve_comment(comment.id).await.unwrap();
        assert!(approved.approved);

        let listing = blog.approved_comments(post.id).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, comment.id);

        // Approving twice has no additional effect.
        blog.approve_comment(comment.id).await.unwrap();
        assert_eq!(blog.approved_comments(post.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_approved_listing_excludes_other_comments() {
        let (blog, _) = blog();
        let author = Uuid::new_v4();

        let post = blog
            .create_post(author, "Hello".to_owned(), "World".to_owned())
            .await
            .unwrap();

        let first = blog
            .create_comment(post.id, "Alice".to_owned(), "First".to_owned())
            .await
            .unwrap();
        blog.create_comment(post.id, "Bob".to_owned(), "Second".to_owned())
            .await
            .unwrap();
        blog.approve_comment(first.id).await.unwrap();

        let all = blog.comments(post.id).await.unwrap();
        assert_eq!(all.len(), 2);

        let approved = blog.approved_comments(post.id).await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].content, "First");
    }

    #[tokio::test]
    async fn test_delete_post_cascades_to_comments() {
        let (blog, store) = blog();
        let author = Uuid::new_v4();

        let post = blog
            .create_post(author, "Hello".to_owned(), "World".to_owned())
            .await
            .unwrap();
        let comment = blog
            .create_comment(post.id, "Alice".to_owned(), "Nice!".to_owned())
            .await
            .unwrap();

        blog.delete_post(post.id).await.unwrap();

        assert!(matches!(
            blog.get_post(post.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            blog.get_comment(comment.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(
            store
                .comments()
                .find_by_post_id(post.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_comment_requires_live_post() {
        let (blog, _) = blog();

        let result = blog
            .create_comment(Uuid::new_v4(), "Alice".to_owned(), "Nice!".to_owned())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_title_length_is_enforced_at_save() {
        let (blog, _) = blog();
        let author = Uuid::new_v4();

        let result = blog
            .create_post(author, "x".repeat(201), "body".to_owned())
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        // Nothing was written.
        assert!(
            blog.posts_by_author(author).await.unwrap().is_empty()
        );
    }

    #[tokio::test]
    async fn test_posts_by_author_filters_on_reference() {
        let (blog, _) = blog();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        blog.create_post(alice, "One".to_owned(), "".to_owned())
            .await
            .unwrap();
        blog.create_post(bob, "Two".to_owned(), "".to_owned())
            .await
            .unwrap();

        let posts = blog.posts_by_author(alice).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "One");
    }

    #[tokio::test]
    async fn test_delete_comment_leaves_post_alone() {
        let (blog, _) = blog();
        let author = Uuid::new_v4();

        let post = blog
            .create_post(author, "Hello".to_owned(), "World".to_owned())
            .await
            .unwrap();
        let comment = blog
            .create_comment(post.id, "Alice".to_owned(), "Nice!".to_owned())
            .await
            .unwrap();

        blog.delete_comment(comment.id).await.unwrap();

        assert!(matches!(
            blog.get_comment(comment.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(blog.get_post(post.id).await.is_ok());
        assert!(blog.comments(post.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let (blog, _) = blog();

        assert!(matches!(
            blog.delete_post(Uuid::new_v4()).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
