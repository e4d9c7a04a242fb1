//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the goal service:
//! - Password hashing (Argon2id, PHC strings)
//! - Signed, time-bounded identity tokens (HS256 JWT)
//! - Authentication coordination
//!
//! The service defines its own identity and repository types and adapts
//! these implementations at its boundaries.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::with_default_ttl(b"secret_key_at_least_32_bytes_long!");
//! let issued = codec.issue("user123").unwrap();
//! assert_eq!(codec.verify(&issued.token).unwrap(), "user123");
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
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Each request: validate token
//! assert_eq!(auth.validate_token(&result.access_token).unwrap(), "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
