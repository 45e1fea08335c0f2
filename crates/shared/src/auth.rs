//! Authentication types for JWT and auth endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Email of the authenticated user.
    pub email: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, email: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }
}

/// Registration request payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User first name.
    pub first_name: String,
    /// User last name.
    pub last_name: String,
    /// User email.
    pub email: String,
    /// Brazilian CPF (11 digits, punctuation tolerated).
    pub cpf: String,
    /// Plaintext password.
    pub password: String,
}

/// Login request payload. The identifier may be an email or a CPF.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email or CPF.
    pub identifier: String,
    /// Plaintext password.
    pub password: String,
}

/// Public user representation. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// User ID.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email (canonical, lower-cased).
    pub email: String,
    /// CPF (canonical, digits only).
    pub cpf: String,
    /// Derived display name.
    pub full_name: String,
}

impl PublicUser {
    /// Builds the public representation, deriving `full_name`.
    #[must_use]
    pub fn new(id: Uuid, first_name: &str, last_name: &str, email: &str, cpf: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            cpf: cpf.to_string(),
            full_name: format!("{first_name} {last_name}"),
        }
    }
}

/// Response payload for successful register and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Signed access token.
    pub access_token: String,
    /// Public profile of the authenticated user.
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_derives_full_name() {
        let user = PublicUser::new(
            Uuid::new_v4(),
            "João",
            "Silva",
            "joao.silva@email.com",
            "52998224725",
        );
        assert_eq!(user.full_name, "João Silva");
    }

    #[test]
    fn test_claims_carry_subject_and_email() {
        let user_id = Uuid::new_v4();
        let expires_at = Utc::now() + chrono::Duration::hours(1);
        let claims = Claims::new(user_id, "a@b.com", expires_at);

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.exp > claims.iat);
    }
}
