use thiserror::Error;

/// Error type for password operations.
///
/// Verification never errors: a mismatch and a malformed digest both
/// simply fail to verify.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
