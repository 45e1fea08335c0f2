//! Registration input validation rules.
//!
//! Parse-then-validate: the raw request is checked as a whole before
//! any canonicalization or persistence happens. Failures carry the
//! user-facing message for the 400 response.

use email_address::EmailAddress;
use thiserror::Error;

use atelier_shared::auth::RegisterRequest;

use crate::cpf;

/// Special characters accepted (and required) in passwords.
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

const NAME_MAX_LEN: usize = 50;
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 20;

/// Registration validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First name empty or over the length limit.
    #[error("first name must be non-empty and at most 50 characters")]
    InvalidFirstName,

    /// Last name empty or over the length limit.
    #[error("last name must be non-empty and at most 50 characters")]
    InvalidLastName,

    /// Email does not parse as an address.
    #[error("email address is malformed")]
    InvalidEmail,

    /// CPF failed the checksum.
    #[error("invalid CPF")]
    InvalidCpf,

    /// Password too short, too long, or missing a required character class.
    #[error(
        "password must be 8-20 characters and contain at least one lowercase letter, \
         one uppercase letter, one digit, and one special character (@$!%*?&)"
    )]
    WeakPassword,
}

/// Validates a registration request.
///
/// # Errors
///
/// Returns the first failing rule, in field order: names, email,
/// password, CPF checksum.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    if !name_is_valid(&request.first_name) {
        return Err(ValidationError::InvalidFirstName);
    }
    if !name_is_valid(&request.last_name) {
        return Err(ValidationError::InvalidLastName);
    }
    if !email_is_valid(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !password_is_valid(&request.password) {
        return Err(ValidationError::WeakPassword);
    }
    if !cpf::validate(&request.cpf) {
        return Err(ValidationError::InvalidCpf);
    }
    Ok(())
}

fn name_is_valid(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= NAME_MAX_LEN
}

fn email_is_valid(email: &str) -> bool {
    email.parse::<EmailAddress>().is_ok()
}

fn password_is_valid(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    has_lowercase && has_uppercase && has_digit && has_special
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "João".to_string(),
            last_name: "Silva".to_string(),
            email: "joao.silva@email.com".to_string(),
            cpf: "52998224725".to_string(),
            password: "MinhaSenh@123".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert_eq!(validate_registration(&valid_request()), Ok(()));
    }

    #[test]
    fn test_empty_first_name() {
        let mut request = valid_request();
        request.first_name = "   ".to_string();
        assert_eq!(
            validate_registration(&request),
            Err(ValidationError::InvalidFirstName)
        );
    }

    #[test]
    fn test_last_name_over_limit() {
        let mut request = valid_request();
        request.last_name = "x".repeat(51);
        assert_eq!(
            validate_registration(&request),
            Err(ValidationError::InvalidLastName)
        );
    }

    #[test]
    fn test_name_at_limit_is_accepted() {
        let mut request = valid_request();
        request.last_name = "x".repeat(50);
        assert_eq!(validate_registration(&request), Ok(()));
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("missing@tld@double.com")]
    #[case("")]
    fn test_malformed_email(#[case] email: &str) {
        let mut request = valid_request();
        request.email = email.to_string();
        assert_eq!(
            validate_registration(&request),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[rstest]
    #[case("Curta@1")] // 7 chars, too short
    #[case("MuitoLongaDemais@12345")] // 22 chars, too long
    #[case("minhasenha@123")] // no uppercase
    #[case("MINHASENHA@123")] // no lowercase
    #[case("MinhaSenha@abc")] // no digit
    #[case("MinhaSenha123")] // no special char
    fn test_weak_passwords(#[case] password: &str) {
        let mut request = valid_request();
        request.password = password.to_string();
        assert_eq!(
            validate_registration(&request),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn test_invalid_cpf_checksum() {
        let mut request = valid_request();
        request.cpf = "52998224726".to_string();
        assert_eq!(
            validate_registration(&request),
            Err(ValidationError::InvalidCpf)
        );
    }

    #[test]
    fn test_formatted_cpf_is_accepted() {
        let mut request = valid_request();
        request.cpf = "529.982.247-25".to_string();
        assert_eq!(validate_registration(&request), Ok(()));
    }
}
