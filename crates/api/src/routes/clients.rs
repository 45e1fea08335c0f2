//! Client management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use atelier_core::cpf;
use atelier_db::ClientRepository;
use atelier_db::repositories::{CreateClientInput, UpdateClientInput};
use atelier_shared::types::{PageRequest, PageResponse};

/// Creates the clients router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", post(create_client))
        .route("/clients", get(list_clients))
        .route("/clients/{client_id}", get(get_client))
        .route("/clients/{client_id}", patch(update_client))
        .route("/clients/{client_id}", delete(deactivate_client))
}

/// Request payload for creating a client.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    /// Client name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: String,
    /// CPF for individuals.
    pub cpf: Option<String>,
    /// CNPJ for companies.
    pub cnpj: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Request payload for updating a client.
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    /// Client name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<Option<String>>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<Option<String>>,
    /// Active flag.
    pub is_active: Option<bool>,
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "Client not found"
        })),
    )
        .into_response()
}

/// POST /clients - Create a new client.
async fn create_client(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateClientRequest>,
) -> Response {
    if payload.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "name is required"
            })),
        )
            .into_response();
    }

    // A client CPF is optional, but when given it must check out
    if let Some(ref client_cpf) = payload.cpf {
        if !cpf::validate(client_cpf) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "invalid CPF"
                })),
            )
                .into_response();
        }
    }

    let repo = ClientRepository::new((*state.db).clone());
    match repo
        .create(
            CreateClientInput {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                cpf: payload.cpf,
                cnpj: payload.cnpj,
                address: payload.address,
            },
            auth.user_id(),
        )
        .await
    {
        Ok(client) => {
            info!(client_id = %client.id, created_by = %auth.user_id(), "Client created");
            (StatusCode::CREATED, Json(client)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create client");
            internal_error()
        }
    }
}

/// GET /clients - List clients.
async fn list_clients(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Response {
    let repo = ClientRepository::new((*state.db).clone());

    match repo.list(page.offset(), page.limit()).await {
        Ok((clients, total)) => {
            let response = PageResponse::new(clients, page.page, page.per_page, total);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list clients");
            internal_error()
        }
    }
}

/// GET `/clients/{client_id}` - Get client details.
async fn get_client(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(client_id): Path<Uuid>,
) -> Response {
    let repo = ClientRepository::new((*state.db).clone());

    match repo.find_by_id(client_id).await {
        Ok(Some(client)) => (StatusCode::OK, Json(client)).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load client");
            internal_error()
        }
    }
}

/// PATCH `/clients/{client_id}` - Update a client.
async fn update_client(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(client_id): Path<Uuid>,
    Json(payload): Json<UpdateClientRequest>,
) -> Response {
    let repo = ClientRepository::new((*state.db).clone());

    let client = match repo.find_by_id(client_id).await {
        Ok(Some(c)) => c,
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load client");
            return internal_error();
        }
    };

    match repo
        .update(
            client,
            UpdateClientInput {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                is_active: payload.is_active,
            },
        )
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update client");
            internal_error()
        }
    }
}

/// DELETE `/clients/{client_id}` - Deactivate a client (soft delete).
async fn deactivate_client(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(client_id): Path<Uuid>,
) -> Response {
    let repo = ClientRepository::new((*state.db).clone());

    match repo.find_by_id(client_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load client");
            return internal_error();
        }
    }

    match repo.deactivate(client_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to deactivate client");
            internal_error()
        }
    }
}
