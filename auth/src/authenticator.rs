use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenIdentity;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator issuing tokens valid for `token_lifetime`.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_lifetime` - Validity window of issued tokens
    pub fn new(jwt_secret: &[u8], token_lifetime: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_lifetime,
        }
    }

    /// Replace the default password hasher (e.g. with a tuned cost).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the given identity.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Identifier embedded as the `id` claim
    /// * `username` - Username embedded as the `username` claim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(user_id, username)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(
        &self,
        user_id: impl ToString,
        username: impl ToString,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, username, self.token_lifetime);
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and return the identity it carries.
    ///
    /// # Errors
    /// * `TokenExpired` / `InvalidToken` - Verification failed
    /// * `MissingClaim` - The token has no `id` (or no `exp`) claim
    pub fn validate_token(&self, token: &str) -> Result<TokenIdentity, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;
        claims.identity()
    }
}
