//! Authentication rules and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id behind a replaceable capability
//! - Registration input validation rules

mod password;
mod validation;

pub use password::{Argon2Hasher, PasswordError, PasswordHasher, hash_password, verify_password};
pub use validation::{ValidationError, validate_registration};
