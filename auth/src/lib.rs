//! Authentication utilities library
//!
//! Provides the credential and token primitives the blog service builds on:
//! - Password hashing (Argon2id)
//! - Signed access tokens carrying `{username, id}` (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let result = auth.authenticate("password123", &hash, "user123", "alice").unwrap();
//!
//! // Later requests: validate token
//! let identity = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(identity.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIdentity;
pub use password::PasswordError;
pub use password::PasswordHasher;
