//! Integration tests for the user repository.
//!
//! These tests run against a live migrated database (DATABASE_URL).

mod common;

use atelier_db::repositories::{CreateUserInput, UserError, UserRepository};
use common::{connect, random_email, random_valid_cpf};
use uuid::Uuid;

fn input(email: &str, cpf: &str) -> CreateUserInput {
    CreateUserInput {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        cpf: cpf.to_string(),
        password_hash: "$argon2id$test_hash".to_string(),
    }
}

#[tokio::test]
async fn test_user_create_and_find_by_id() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());
    let email = random_email();
    let cpf = random_valid_cpf();

    let user = repo
        .create(input(&email, &cpf))
        .await
        .expect("Failed to create user");

    assert_eq!(user.email, email);
    assert_eq!(user.cpf, cpf);
    assert!(user.is_active);

    let found = repo
        .find_by_id(user.id)
        .await
        .expect("Failed to find user")
        .expect("User should exist");

    assert_eq!(found.id, user.id);
}

#[tokio::test]
async fn test_user_create_stores_canonical_forms() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());
    let cpf = random_valid_cpf();
    let formatted_cpf = format!(
        "{}.{}.{}-{}",
        &cpf[0..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..11]
    );
    let email = format!("Test-{}@Example.COM", Uuid::new_v4());

    let user = repo
        .create(input(&email, &formatted_cpf))
        .await
        .expect("Failed to create user");

    // Raw submitted forms are never stored.
    assert_eq!(user.email, email.to_lowercase());
    assert_eq!(user.cpf, cpf);
}

#[tokio::test]
async fn test_user_find_by_email_or_cpf() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());
    let email = random_email();
    let cpf = random_valid_cpf();

    let user = repo
        .create(input(&email, &cpf))
        .await
        .expect("Failed to create user");

    // Identifier with '@' resolves as email, case-insensitively.
    let by_email = repo
        .find_by_email_or_cpf(&email.to_uppercase())
        .await
        .expect("Query should succeed")
        .expect("User should exist");
    assert_eq!(by_email.id, user.id);

    // Anything else resolves as CPF, punctuation tolerated.
    let formatted_cpf = format!(
        "{}.{}.{}-{}",
        &cpf[0..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..11]
    );
    let by_cpf = repo
        .find_by_email_or_cpf(&formatted_cpf)
        .await
        .expect("Query should succeed")
        .expect("User should exist");
    assert_eq!(by_cpf.id, user.id);
}

#[tokio::test]
async fn test_user_find_by_email_or_cpf_not_found() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());

    let result = repo
        .find_by_email_or_cpf("nonexistent@example.com")
        .await
        .expect("Query should succeed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());
    let email = random_email();

    repo.create(input(&email, &random_valid_cpf()))
        .await
        .expect("Failed to create user");

    let result = repo.create(input(&email, &random_valid_cpf())).await;
    assert!(matches!(result, Err(UserError::EmailTaken)));
}

#[tokio::test]
async fn test_duplicate_cpf_rejected() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());
    let cpf = random_valid_cpf();

    repo.create(input(&random_email(), &cpf))
        .await
        .expect("Failed to create user");

    let result = repo.create(input(&random_email(), &cpf)).await;
    assert!(matches!(result, Err(UserError::CpfTaken)));
}

#[tokio::test]
async fn test_find_by_id_excludes_deactivated() {
    let db = connect().await;
    let repo = UserRepository::new(db.clone());

    let user = repo
        .create(input(&random_email(), &random_valid_cpf()))
        .await
        .expect("Failed to create user");

    repo.set_active(user.id, false)
        .await
        .expect("Failed to deactivate user");

    let result = repo
        .find_by_id(user.id)
        .await
        .expect("Query should succeed");
    assert!(result.is_none());

    // Lookup by identifier still resolves; login collapses the
    // inactive case into invalid credentials at the gateway.
    let by_email = repo
        .find_by_email_or_cpf(&user.email)
        .await
        .expect("Query should succeed")
        .expect("User row should still exist");
    assert!(!by_email.is_active);
}
