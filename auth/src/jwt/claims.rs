use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claim set carried by an access token.
///
/// Every field is optional on the wire so that tokens with missing claims
/// still decode and can be rejected with a precise [`JwtError::MissingClaim`]
/// instead of a generic decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Identifier of the user the token was issued to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Identity proven by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub id: String,
    pub username: String,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims for a freshly authenticated user, valid for `lifetime` from now.
    pub fn for_user(id: impl ToString, username: impl ToString, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            username: Some(username.to_string()),
            id: Some(id.to_string()),
            iat: Some(now.timestamp()),
            exp: Some((now + lifetime).timestamp()),
        }
    }

    pub fn with_username(mut self, username: impl ToString) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Extract the identity, rejecting tokens without an `id` claim.
    pub fn identity(&self) -> Result<TokenIdentity, JwtError> {
        let id = self
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| JwtError::MissingClaim("id".to_string()))?;

        Ok(TokenIdentity {
            id: id.to_string(),
            username: self.username.clone().unwrap_or_default(),
        })
    }
}
