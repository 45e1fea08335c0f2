//! User repository for database operations.
//!
//! Uniqueness of email and CPF is arbitrated by the database unique
//! constraints: creation is a single INSERT, never check-then-insert,
//! so exactly one of any number of concurrent colliding attempts
//! succeeds.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use atelier_core::cpf;

use crate::entities::users;

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Email already registered.
    #[error("email already registered")]
    EmailTaken,

    /// CPF already registered.
    #[error("CPF already registered")]
    CpfTaken,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email, any casing; stored lower-cased.
    pub email: String,
    /// CPF, punctuation tolerated; stored digits-only.
    pub cpf: String,
    /// Already-hashed password (PHC string).
    pub password_hash: String,
}

/// User repository for identity persistence.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user, storing email and CPF in canonical form.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmailTaken` / `UserError::CpfTaken` when the
    /// corresponding unique constraint rejects the insert, and
    /// `UserError::Database` for any other failure.
    pub async fn create(&self, input: CreateUserInput) -> Result<users::Model, UserError> {
        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email.trim().to_lowercase()),
            cpf: Set(cpf::clean(&input.cpf)),
            password_hash: Set(input.password_hash),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match user.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    if detail.contains("users_cpf_key") {
                        Err(UserError::CpfTaken)
                    } else {
                        Err(UserError::EmailTaken)
                    }
                }
                _ => Err(UserError::Database(err)),
            },
        }
    }

    /// Finds a user by email or CPF.
    ///
    /// Identifiers containing `@` are matched as lower-cased emails;
    /// anything else is canonicalized to digits and matched as a CPF.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email_or_cpf(
        &self,
        identifier: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        let query = if identifier.contains('@') {
            users::Entity::find()
                .filter(users::Column::Email.eq(identifier.trim().to_lowercase()))
        } else {
            users::Entity::find().filter(users::Column::Cpf.eq(cpf::clean(identifier)))
        };

        query.one(&self.db).await
    }

    /// Finds an active user by ID. Deactivated accounts do not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id)
            .filter(users::Column::IsActive.eq(true))
            .one(&self.db)
            .await
    }

    /// Sets the account-status flag for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> Result<(), DbErr> {
        let user = users::ActiveModel {
            id: Set(id),
            is_active: Set(is_active),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        user.update(&self.db).await?;
        Ok(())
    }
}
