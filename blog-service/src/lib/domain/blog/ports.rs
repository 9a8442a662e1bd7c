use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::BlogWithOwner;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// List all blogs with their owners resolved.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_blogs(&self) -> Result<Vec<BlogWithOwner>, BlogError>;

    /// Create a blog owned by `owner` and record it in the owner's blog list.
    ///
    /// # Errors
    /// * `OwnerNotFound` - `owner` does not resolve to a stored user
    /// * `DatabaseError` - Database operation failed
    async fn create_blog(
        &self,
        owner: &UserId,
        command: CreateBlogCommand,
    ) -> Result<BlogWithOwner, BlogError>;

    /// Append a comment to a blog.
    ///
    /// The blog is looked up before the comment is validated.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `Validation` - Comment missing or empty
    /// * `DatabaseError` - Database operation failed
    async fn add_comment(
        &self,
        id: &BlogId,
        comment: Option<String>,
    ) -> Result<BlogWithOwner, BlogError>;

    /// Overwrite a blog's likes; `None` leaves them unchanged.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_likes(
        &self,
        id: &BlogId,
        likes: Option<i64>,
    ) -> Result<BlogWithOwner, BlogError>;

    /// Delete a blog on behalf of `requester`.
    ///
    /// Owned blogs may only be deleted by their owner. The owner's `blogs`
    /// list is left untouched.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `Forbidden` - Blog is owned by another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_blog(&self, id: &BlogId, requester: &UserId) -> Result<(), BlogError>;

    /// Remove every blog.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all_blogs(&self) -> Result<(), BlogError>;
}

/// Persistence operations for blogs.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError>;

    /// Retrieve multiple blogs by identifiers (missing IDs are skipped).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_ids(&self, ids: &[BlogId]) -> Result<Vec<Blog>, BlogError>;

    /// Retrieve all blogs in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;

    /// Atomically overwrite likes and return the updated blog.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_likes(&self, id: &BlogId, likes: i64) -> Result<Blog, BlogError>;

    /// Atomically append a comment and return the updated blog.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn append_comment(&self, id: &BlogId, comment: &str) -> Result<Blog, BlogError>;

    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all(&self) -> Result<(), BlogError>;
}
