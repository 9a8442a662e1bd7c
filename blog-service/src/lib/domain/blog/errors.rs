use thiserror::Error;

use crate::domain::blog::models::BlogId;
use crate::domain::user::models::UserId;

/// Error type for BlogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Missing required blog input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogValidationError {
    #[error("A blog must contain a title")]
    MissingTitle,

    #[error("A blog must contain a url")]
    MissingUrl,

    #[error("Must contain a comment")]
    MissingComment,
}

/// Top-level error type for all blog-related operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid blog ID: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error(transparent)]
    Validation(#[from] BlogValidationError),

    #[error("Blog not found: {0}")]
    NotFound(BlogId),

    #[error("you do not have permission to delete this blog")]
    Forbidden { blog_id: BlogId, user_id: UserId },

    /// The authenticated identity no longer resolves to a stored user.
    #[error("User not found: {0}")]
    OwnerNotFound(UserId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
