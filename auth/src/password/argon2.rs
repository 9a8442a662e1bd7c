use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Slow one-way hash for stored credentials (Argon2id, random salt per hash).
///
/// The cost parameters only affect new hashes: verification reads the
/// parameters embedded in the stored PHC string, so hashes produced under an
/// older cost keep verifying after the cost is changed.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the Argon2 crate's default cost.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with an explicit Argon2id cost.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes
    /// * `parallelism` - Degree of parallelism
    ///
    /// # Errors
    /// * `InvalidParameters` - The combination is rejected by Argon2
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(1024, 1, 1).expect("valid argon2 cost")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = cheap_hasher();

        let hash = hasher.hash("secret").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher.verify("secret", &hash).expect("Failed to verify"));
        assert!(!hasher.verify("notsecret", &hash).expect("Failed to verify"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = cheap_hasher();

        let first = hasher.hash("secret").unwrap();
        let second = hasher.hash("secret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_from_other_cost_still_verifies() {
        let stored = cheap_hasher().hash("secret").unwrap();

        let stronger = PasswordHasher::with_cost(2048, 2, 1).unwrap();
        assert!(stronger.verify("secret", &stored).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let result = cheap_hasher().verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_rejects_invalid_cost() {
        let result = PasswordHasher::with_cost(1, 0, 0);
        assert!(matches!(result, Err(PasswordError::InvalidParameters(_))));
    }
}
