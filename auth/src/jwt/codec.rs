use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signed, time-bounded identity token issuer and verifier.
///
/// Uses HS256 (HMAC with SHA-256). Verification needs nothing but the
/// shared secret, so any process holding it can check any token.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

/// A freshly issued token together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenCodec {
    /// Lifetime in seconds applied when no explicit TTL is configured.
    pub const DEFAULT_TTL_SECS: i64 = 60 * 60;

    /// Create a new codec with a secret key and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `ttl` - How long an issued token stays valid
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Create a codec using [`TokenCodec::DEFAULT_TTL_SECS`].
    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, Duration::seconds(Self::DEFAULT_TTL_SECS))
    }

    /// Issue a token for `subject`, valid from now until now + TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let claims = Claims::for_subject(subject, now, self.ttl);
        // Report the signed, whole-second expiry rather than `now + ttl`
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| TokenError::EncodingFailed("expiry out of range".to_string()))?;

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and return the subject it was issued for.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Malformed` - Token structure or claims are unusable
    /// * `Expired` - Current time is at or past the `exp` claim
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit current time.
    ///
    /// # Errors
    /// Same as [`TokenCodec::verify`].
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against `now` with no leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })?
            .claims;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        if claims.sub.is_empty() {
            return Err(TokenError::Malformed("empty subject".to_string()));
        }

        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::with_default_ttl(SECRET);

        let issued = codec.issue("user123").expect("Failed to issue token");
        assert!(!issued.token.is_empty());

        let subject = codec.verify(&issued.token).expect("Failed to verify token");
        assert_eq!(subject, "user123");
    }

    #[test]
    fn test_reported_expiry_matches_signed_claim() {
        let codec = TokenCodec::new(SECRET, Duration::minutes(15));
        let now = DateTime::from_timestamp(1_700_000_000, 750_000_000).unwrap();

        let issued = codec.issue_at("user123", now).expect("Failed to issue token");

        assert_eq!(issued.expires_at.timestamp(), 1_700_000_000 + 15 * 60);
        assert_eq!(issued.expires_at.timestamp_subsec_nanos(), 0);
        assert!(issued.expires_at <= now + Duration::minutes(15));
    }

    #[test]
    fn test_token_rejected_at_reported_expiry() {
        let codec = TokenCodec::new(SECRET, Duration::minutes(15));
        let now = DateTime::from_timestamp(1_700_000_000, 750_000_000).unwrap();

        let issued = codec.issue_at("user123", now).expect("Failed to issue token");

        assert_eq!(
            codec.verify_at(&issued.token, issued.expires_at - Duration::seconds(1)),
            Ok("user123".to_string())
        );
        assert_eq!(
            codec.verify_at(&issued.token, issued.expires_at),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_valid_just_before_ttl_and_invalid_after() {
        let codec = TokenCodec::new(SECRET, Duration::hours(1));
        let issued_at = Utc::now();

        let issued = codec
            .issue_at("user123", issued_at)
            .expect("Failed to issue token");

        let at_59 = codec.verify_at(&issued.token, issued_at + Duration::minutes(59));
        assert_eq!(at_59, Ok("user123".to_string()));

        let at_61 = codec.verify_at(&issued.token, issued_at + Duration::minutes(61));
        assert_eq!(at_61, Err(TokenError::Expired));
    }

    #[test]
    fn test_token_expires_exactly_at_ttl() {
        let codec = TokenCodec::new(SECRET, Duration::hours(1));
        let issued_at = Utc::now();

        let issued = codec
            .issue_at("user123", issued_at)
            .expect("Failed to issue token");

        let result = codec.verify_at(&issued.token, issued_at + Duration::hours(1));
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_expired_token_with_wall_clock() {
        let codec = TokenCodec::new(SECRET, Duration::hours(1));

        let issued = codec
            .issue_at("user123", Utc::now() - Duration::hours(2))
            .expect("Failed to issue token");

        assert_eq!(codec.verify(&issued.token), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_malformed_token() {
        let codec = TokenCodec::with_default_ttl(SECRET);

        assert!(matches!(
            codec.verify("invalid.token.here"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(codec.verify(""), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenCodec::with_default_ttl(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::with_default_ttl(b"secret2_at_least_32_bytes_long_key!");

        let issued = issuer.issue("user123").expect("Failed to issue token");

        assert_eq!(
            verifier.verify(&issued.token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_tampered_payload() {
        let codec = TokenCodec::with_default_ttl(SECRET);

        let original = codec.issue("user123").expect("Failed to issue token");
        let other = codec.issue("attacker").expect("Failed to issue token");

        // Header and signature of one token, payload of the other
        let original_parts: Vec<&str> = original.token.split('.').collect();
        let other_parts: Vec<&str> = other.token.split('.').collect();
        let forged = format!(
            "{}.{}.{}",
            original_parts[0], other_parts[1], original_parts[2]
        );

        assert_eq!(codec.verify(&forged), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_rejects_empty_subject() {
        let codec = TokenCodec::with_default_ttl(SECRET);

        let issued = codec.issue("").expect("Failed to issue token");

        assert!(matches!(
            codec.verify(&issued.token),
            Err(TokenError::Malformed(_))
        ));
    }
}
