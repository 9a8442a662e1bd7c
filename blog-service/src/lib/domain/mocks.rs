use async_trait::async_trait;
use mockall::mock;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn create(&self, user: User) -> Result<User, UserError>;
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
        async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
        async fn list_all(&self) -> Result<Vec<User>, UserError>;
        async fn append_blog(&self, id: &UserId, blog_id: &BlogId) -> Result<(), UserError>;
        async fn delete_all(&self) -> Result<(), UserError>;
    }
}

mock! {
    pub TestBlogRepository {}

    #[async_trait]
    impl BlogRepository for TestBlogRepository {
        async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;
        async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError>;
        async fn find_by_ids(&self, ids: &[BlogId]) -> Result<Vec<Blog>, BlogError>;
        async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;
        async fn set_likes(&self, id: &BlogId, likes: i64) -> Result<Blog, BlogError>;
        async fn append_comment(&self, id: &BlogId, comment: &str) -> Result<Blog, BlogError>;
        async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;
        async fn delete_all(&self) -> Result<(), BlogError>;
    }
}

pub fn user(username: &str, name: &str) -> User {
    User {
        id: UserId::new(),
        username: Username::new(username.to_string()).unwrap(),
        name: Some(name.to_string()),
        password_hash: "$argon2id$test_hash".to_string(),
        blogs: vec![],
    }
}

pub fn blog(title: &str, owner: Option<UserId>) -> Blog {
    Blog {
        id: BlogId::new(),
        title: title.to_string(),
        author: Some("Test Author".to_string()),
        url: "www.test.com".to_string(),
        likes: 10,
        user: owner,
        comments: vec![],
    }
}
