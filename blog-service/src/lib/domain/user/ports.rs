use async_trait::async_trait;

use crate::domain::blog::models::BlogId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithBlogs;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Checks run in order: username uniqueness, username length, password
    /// length. The first failing check decides the error.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - A user with this username exists
    /// * `InvalidUsername` - Username missing or shorter than 3 characters
    /// * `InvalidPassword` - Password missing or shorter than 3 characters
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by username, credentials included.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserError>;

    /// List all users with their authored blogs resolved.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<UserWithBlogs>, UserError>;

    /// Remove every user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all_users(&self) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage. Performs no uniqueness check.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve the first stored user with this username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Retrieve multiple users by identifiers (missing IDs are skipped).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;

    /// Retrieve all users in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Append a blog id to the user's `blogs` list.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn append_blog(&self, id: &UserId, blog_id: &BlogId) -> Result<(), UserError>;

    /// Remove every user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all(&self) -> Result<(), UserError>;
}
