//! JWT token generation and validation.
//!
//! Tokens are stateless: validity is fully determined by signature and
//! expiry at validation time. There is no server-side session table.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Claims;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token time-to-live in seconds.
    pub token_ttl_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            token_ttl_secs: 3600,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token is missing, malformed, expired, or forged.
    ///
    /// All validation failures collapse into this variant so callers
    /// cannot distinguish the cause from the outcome.
    #[error("invalid token")]
    Invalid,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_ttl_secs", &self.config.token_ttl_secs)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates an access token carrying the user id and email.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::seconds(self.config.token_ttl_secs);
        let claims = Claims::new(user_id, email, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// Expiry is exact: no clock-skew leeway, so a token is rejected
    /// the second its `exp` passes.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Invalid` for any failure: malformed structure,
    /// bad signature, or expiry.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| JwtError::Invalid)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_ttl_secs: 3600,
        })
    }

    #[test]
    fn test_generate_token() {
        let service = create_test_service();
        let token = service
            .generate_token(Uuid::new_v4(), "user@example.com")
            .unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_validate_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_token(user_id, "user@example.com").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Invalid)));
    }

    #[test]
    fn test_forged_token_is_invalid() {
        let service = create_test_service();
        let other = JwtService::new(JwtConfig {
            secret: "a-different-secret".to_string(),
            token_ttl_secs: 3600,
        });

        let token = other.generate_token(Uuid::new_v4(), "user@example.com").unwrap();
        assert!(matches!(service.validate_token(&token), Err(JwtError::Invalid)));
    }

    #[test]
    fn test_short_ttl_token_expires() {
        let service = JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_ttl_secs: 1,
        });

        let token = service
            .generate_token(Uuid::new_v4(), "user@example.com")
            .unwrap();

        // Fresh token verifies
        assert!(service.validate_token(&token).is_ok());

        // Two seconds later it does not
        std::thread::sleep(std::time::Duration::from_secs(2));
        assert!(matches!(service.validate_token(&token), Err(JwtError::Invalid)));
    }

    #[test]
    fn test_expired_and_forged_failures_are_indistinguishable() {
        let service = create_test_service();

        // Claims with an exp already in the past
        let expires_at = Utc::now() - Duration::seconds(120);
        let claims = Claims::new(Uuid::new_v4(), "user@example.com", expires_at);
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-key-for-testing".as_bytes()),
        )
        .unwrap();

        let expired_err = service.validate_token(&expired).unwrap_err();
        let garbage_err = service.validate_token("not-a-token").unwrap_err();

        assert_eq!(expired_err.to_string(), garbage_err.to_string());
    }
}
