use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithBlogs;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR, BR>
where
    UR: UserRepository,
    BR: BlogRepository,
{
    repository: Arc<UR>,
    blog_repository: Arc<BR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR, BR> UserService<UR, BR>
where
    UR: UserRepository,
    BR: BlogRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `blog_repository` - Blog persistence, used to resolve `blogs` lists
    /// * `password_hasher` - Hasher for newly registered passwords
    pub fn new(
        repository: Arc<UR>,
        blog_repository: Arc<BR>,
        password_hasher: auth::PasswordHasher,
    ) -> Self {
        Self {
            repository,
            blog_repository,
            password_hasher,
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|e| UserError::Hashing(e.to_string()))?
            .map_err(|e| UserError::Hashing(e.to_string()))
    }
}

#[async_trait]
impl<UR, BR> UserServicePort for UserService<UR, BR>
where
    UR: UserRepository,
    BR: BlogRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if let Some(username) = command.username.as_deref() {
            if self.repository.find_by_username(username).await?.is_some() {
                return Err(UserError::UsernameAlreadyExists(username.to_string()));
            }
        }

        let username = Username::new(command.username.unwrap_or_default())?;
        let password = Password::new(command.password.unwrap_or_default())?;
        let password_hash = self.hash_password(password).await?;

        let user = User {
            id: UserId::new(),
            username,
            name: command.name,
            password_hash,
            blogs: Vec::new(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<UserWithBlogs>, UserError> {
        let users = self.repository.list_all().await?;

        let blog_ids: Vec<BlogId> = users
            .iter()
            .flat_map(|user| user.blogs.iter().copied())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let blogs: HashMap<_, _> = self
            .blog_repository
            .find_by_ids(&blog_ids)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|blog| (blog.id, blog))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let authored = user
                    .blogs
                    .iter()
                    .filter_map(|id| blogs.get(id).cloned())
                    .collect();
                UserWithBlogs {
                    user,
                    blogs: authored,
                }
            })
            .collect())
    }

    async fn delete_all_users(&self) -> Result<(), UserError> {
        self.repository.delete_all().await
    }
}
