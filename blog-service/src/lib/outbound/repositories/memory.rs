use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Process-local storage for users and blogs.
///
/// Implements both repository ports so one instance backs both services.
/// Records are kept in insertion order. Removing users clears the `user`
/// reference of their blogs, matching the foreign key in the Postgres schema.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.read().await.clone())
    }

    async fn append_blog(&self, id: &UserId, blog_id: &BlogId) -> Result<(), UserError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == *id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        user.blogs.push(*blog_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), UserError> {
        // lock order: users before blogs
        let mut users = self.users.write().await;
        let mut blogs = self.blogs.write().await;

        for blog in blogs.iter_mut() {
            blog.user = None;
        }
        users.clear();

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryStore {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        self.blogs.write().await.push(blog.clone());
        Ok(blog)
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|blog| blog.id == *id).cloned())
    }

    async fn find_by_ids(&self, ids: &[BlogId]) -> Result<Vec<Blog>, BlogError> {
        let blogs = self.blogs.read().await;
        Ok(blogs
            .iter()
            .filter(|blog| ids.contains(&blog.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogError> {
        Ok(self.blogs.read().await.clone())
    }

    async fn set_likes(&self, id: &BlogId, likes: i64) -> Result<Blog, BlogError> {
        let mut blogs = self.blogs.write().await;
        let blog = blogs
            .iter_mut()
            .find(|blog| blog.id == *id)
            .ok_or(BlogError::NotFound(*id))?;

        blog.likes = likes;
        Ok(blog.clone())
    }

    async fn append_comment(&self, id: &BlogId, comment: &str) -> Result<Blog, BlogError> {
        let mut blogs = self.blogs.write().await;
        let blog = blogs
            .iter_mut()
            .find(|blog| blog.id == *id)
            .ok_or(BlogError::NotFound(*id))?;

        blog.comments.push(comment.to_string());
        Ok(blog.clone())
    }

    async fn delete(&self, id: &BlogId) -> Result<(), BlogError> {
        let mut blogs = self.blogs.write().await;
        let index = blogs
            .iter()
            .position(|blog| blog.id == *id)
            .ok_or(BlogError::NotFound(*id))?;

        blogs.remove(index);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), BlogError> {
        self.blogs.write().await.clear();
        Ok(())
    }
}
