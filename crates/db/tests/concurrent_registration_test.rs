//! Concurrent registration stress tests.
//!
//! The database unique constraints are the arbiter for colliding
//! registrations: exactly one of N simultaneous attempts on the same
//! email (or CPF) succeeds, regardless of interleaving.

mod common;

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Barrier;

use atelier_db::repositories::{CreateUserInput, UserError, UserRepository};
use common::{connect, random_email, random_valid_cpf};

const ATTEMPTS: usize = 8;

#[tokio::test]
async fn test_concurrent_registration_same_email_single_winner() {
    let db = connect().await;
    let email = random_email();
    let barrier = Arc::new(Barrier::new(ATTEMPTS));

    let tasks: Vec<_> = (0..ATTEMPTS)
        .map(|_| {
            let repo = UserRepository::new(db.clone());
            let email = email.clone();
            let cpf = random_valid_cpf();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                repo.create(CreateUserInput {
                    first_name: "Concurrent".to_string(),
                    last_name: "Test".to_string(),
                    email,
                    cpf,
                    password_hash: "$argon2id$test_hash".to_string(),
                })
                .await
            })
        })
        .collect();

    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("Task panicked"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(UserError::EmailTaken)))
        .count();

    assert_eq!(successes, 1, "exactly one attempt must win");
    assert_eq!(duplicates, ATTEMPTS - 1, "all others must see EmailTaken");
}

#[tokio::test]
async fn test_concurrent_registration_same_cpf_single_winner() {
    let db = connect().await;
    let cpf = random_valid_cpf();
    let barrier = Arc::new(Barrier::new(ATTEMPTS));

    let tasks: Vec<_> = (0..ATTEMPTS)
        .map(|_| {
            let repo = UserRepository::new(db.clone());
            let email = random_email();
            let cpf = cpf.clone();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                repo.create(CreateUserInput {
                    first_name: "Concurrent".to_string(),
                    last_name: "Test".to_string(),
                    email,
                    cpf,
                    password_hash: "$argon2id$test_hash".to_string(),
                })
                .await
            })
        })
        .collect();

    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("Task panicked"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(UserError::CpfTaken)))
        .count();

    assert_eq!(successes, 1, "exactly one attempt must win");
    assert_eq!(duplicates, ATTEMPTS - 1, "all others must see CpfTaken");
}
