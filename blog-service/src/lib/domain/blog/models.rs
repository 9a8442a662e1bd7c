use std::fmt;

use uuid::Uuid;

use crate::domain::blog::errors::BlogIdError;
use crate::domain::blog::errors::BlogValidationError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Blog entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    /// Authoring user; blogs without an owner may be deleted by anyone signed in.
    pub user: Option<UserId>,
    /// Append-only, in submission order.
    pub comments: Vec<String>,
}

/// Blog unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a blog ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BlogIdError> {
        Uuid::parse_str(s)
            .map(BlogId)
            .map_err(|e| BlogIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BlogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Public view of a blog's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogOwner {
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
}

impl From<&User> for BlogOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            name: user.name.clone(),
        }
    }
}

/// A blog with its `user` reference resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogWithOwner {
    pub blog: Blog,
    pub owner: Option<BlogOwner>,
}

/// Validated command to create a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBlogCommand {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl CreateBlogCommand {
    /// Validate raw input. `title` is checked before `url`; empty strings
    /// count as absent and `likes` defaults to 0.
    ///
    /// # Errors
    /// * `MissingTitle` - No title, or an empty one
    /// * `MissingUrl` - No url, or an empty one
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
    ) -> Result<Self, BlogValidationError> {
        let title = present(title).ok_or(BlogValidationError::MissingTitle)?;
        let url = present(url).ok_or(BlogValidationError::MissingUrl)?;

        Ok(Self {
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
        })
    }
}

/// A non-empty comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    /// # Errors
    /// * `MissingComment` - No comment, or an empty one
    pub fn new(comment: Option<String>) -> Result<Self, BlogValidationError> {
        present(comment)
            .map(Self)
            .ok_or(BlogValidationError::MissingComment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
