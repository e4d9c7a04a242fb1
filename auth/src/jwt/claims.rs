use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity token claims.
///
/// Binds a token to exactly one subject for a bounded time window.
/// Timestamps are Unix seconds as in RFC 7519.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, issued at `now` and valid for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Unique subject identifier
    /// * `now` - Issue instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, iat and exp set
    pub fn for_subject(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check if the token is expired.
    ///
    /// A token stops being valid at the exact second of its `exp` claim.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
