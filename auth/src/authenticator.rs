use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::IssuedToken;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the process-wide signing secret; construct one per configuration and
/// share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Bearer access token
    pub access_token: String,
    /// Instant the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for AuthenticationResult {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.token,
            expires_at: issued.expires_at,
        }
    }
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(token_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(token_secret, token_ttl),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password digest
    /// * `subject` - Identifier the token is bound to
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or digest is unreadable)
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject)?.into())
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn generate_token(&self, subject: &str) -> Result<AuthenticationResult, TokenError> {
        self.token_codec.issue(subject).map(Into::into)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `TokenError` - Token is forged, malformed or expired
    pub fn validate_token(&self, token: &str) -> Result<String, TokenError> {
        self.token_codec.verify(token)
    }
}
