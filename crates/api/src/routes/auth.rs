//! Authentication routes for register, login, and profile.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, middleware::AuthUser};
use atelier_core::auth::validate_registration;
use atelier_db::repositories::{CreateUserInput, UserError, UserRepository};
use atelier_shared::auth::{AuthResponse, LoginRequest, PublicUser, RegisterRequest};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Creates the auth routes that sit behind the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/profile", get(profile))
}

/// The single 401 used for every login failure.
///
/// Unknown identifier, deactivated account, and wrong password must be
/// indistinguishable, so they all come through here.
fn invalid_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "invalid_credentials",
            "message": "Invalid credentials"
        })),
    )
        .into_response()
}

fn internal_error(message: &'static str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}

/// POST /auth/register - Register a new user and return a token.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Response {
    // Structural validation plus CPF checksum, before any canonicalization
    if let Err(e) = validate_registration(&payload) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": e.to_string()
            })),
        )
            .into_response();
    }

    // Hashing is CPU-bound; keep it off the async workers
    let hasher = state.password_hasher.clone();
    let password = payload.password.clone();
    let password_hash =
        match tokio::task::spawn_blocking(move || hasher.hash(&password)).await {
            Ok(Ok(hash)) => hash,
            Ok(Err(e)) => {
                error!(error = %e, "Failed to hash password");
                return internal_error("An error occurred during registration");
            }
            Err(e) => {
                error!(error = %e, "Password hashing task failed");
                return internal_error("An error occurred during registration");
            }
        };

    // Single INSERT; the unique constraints arbitrate duplicates
    let user_repo = UserRepository::new((*state.db).clone());
    let user = match user_repo
        .create(CreateUserInput {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            cpf: payload.cpf,
            password_hash,
        })
        .await
    {
        Ok(u) => u,
        Err(UserError::EmailTaken) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "email_exists",
                    "message": "An account with this email already exists"
                })),
            )
                .into_response();
        }
        Err(UserError::CpfTaken) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "cpf_exists",
                    "message": "An account with this CPF already exists"
                })),
            )
                .into_response();
        }
        Err(UserError::Database(e)) => {
            error!(error = %e, "Database error during registration");
            return internal_error("An error occurred during registration");
        }
    };

    let access_token = match state.jwt_service.generate_token(user.id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate access token");
            return internal_error("An error occurred during registration");
        }
    };

    info!(user_id = %user.id, "New user registered");

    let response = AuthResponse {
        access_token,
        user: PublicUser::new(
            user.id,
            &user.first_name,
            &user.last_name,
            &user.email,
            &user.cpf,
        ),
    };

    (StatusCode::CREATED, Json(response)).into_response()
}

/// POST /auth/login - Authenticate by email or CPF and return a token.
async fn login(State(state): State<AppState>, Json(payload): Json<LoginRequest>) -> Response {
    let user_repo = UserRepository::new((*state.db).clone());

    let user = match user_repo.find_by_email_or_cpf(&payload.identifier).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!("Login attempt for unknown identifier");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return internal_error("An error occurred during login");
        }
    };

    if !user.is_active {
        info!(user_id = %user.id, "Login attempt for deactivated account");
        return invalid_credentials();
    }

    let hasher = state.password_hasher.clone();
    let password = payload.password;
    let password_hash = user.password_hash.clone();
    let verified = match tokio::task::spawn_blocking(move || {
        hasher.verify(&password, &password_hash)
    })
    .await
    {
        Ok(Ok(v)) => v,
        Ok(Err(e)) => {
            error!(error = %e, "Password verification error");
            return internal_error("An error occurred during login");
        }
        Err(e) => {
            error!(error = %e, "Password verification task failed");
            return internal_error("An error occurred during login");
        }
    };

    if !verified {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return invalid_credentials();
    }

    let access_token = match state.jwt_service.generate_token(user.id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate access token");
            return internal_error("An error occurred during login");
        }
    };

    info!(user_id = %user.id, "User logged in successfully");

    let response = AuthResponse {
        access_token,
        user: PublicUser::new(
            user.id,
            &user.first_name,
            &user.last_name,
            &user.email,
            &user.cpf,
        ),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /auth/profile - Profile of the authenticated user.
///
/// Re-resolves the user from the database so an account deactivated
/// after token issuance stops resolving immediately.
async fn profile(State(state): State<AppState>, auth: AuthUser) -> Response {
    let user_repo = UserRepository::new((*state.db).clone());

    match user_repo.find_by_id(auth.user_id()).await {
        Ok(Some(user)) => {
            let profile = PublicUser::new(
                user.id,
                &user.first_name,
                &user.last_name,
                &user.email,
                &user.cpf,
            );
            (StatusCode::OK, Json(profile)).into_response()
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "unauthorized",
                "message": "Authentication required"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Database error loading profile");
            internal_error("An error occurred loading the profile")
        }
    }
}
