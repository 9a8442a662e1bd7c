use std::fmt;

use uuid::Uuid;

use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
///
/// `blogs` lists the blogs the user authored, in creation order. Entries are
/// never removed, so an id may outlive the blog it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub name: Option<String>,
    pub password_hash: String,
    pub blogs: Vec<BlogId>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// At least three characters, counted as Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const MIN_LENGTH: usize = 3;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.chars().count() < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted for registration. Hashed by the service and
/// never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 3;

    /// # Errors
    /// * `TooShort` - Password shorter than 3 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

/// Command to register a user.
///
/// Fields stay raw because the uniqueness check has to run before any field
/// validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// A user together with the blogs its `blogs` list still resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithBlogs {
    pub user: User,
    pub blogs: Vec<Blog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_minimum_length() {
        assert!(Username::new("abc".to_string()).is_ok());
        assert_eq!(
            Username::new("tp".to_string()),
            Err(UsernameError::TooShort { min: 3 })
        );
        assert!(Username::new(String::new()).is_err());
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // two characters, four bytes
        assert!(Username::new("éé".to_string()).is_err());
        assert!(Username::new("ééé".to_string()).is_ok());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(Password::new("pw".to_string()).is_err());
        assert_eq!(Password::new("pwd".to_string()).unwrap().as_str(), "pwd");
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("thepassword".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("thepassword"));
    }

    #[test]
    fn test_user_id_round_trips_through_string() {
        let id = UserId::new();
        assert_eq!(UserId::from_string(&id.to_string()), Ok(id));
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
