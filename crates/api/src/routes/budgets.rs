//! Budget (quote) management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use atelier_db::entities::sea_orm_active_enums::BudgetStatus;
use atelier_db::entities::{budget_items, budgets};
use atelier_db::repositories::{BudgetItemInput, CreateBudgetInput, UpdateBudgetInput};
use atelier_db::{BudgetRepository, ClientRepository};
use atelier_shared::types::{PageRequest, PageResponse};

/// Creates the budgets router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", post(create_budget))
        .route("/budgets", get(list_budgets))
        .route("/budgets/{budget_id}", get(get_budget))
        .route("/budgets/{budget_id}", patch(update_budget))
        .route("/budgets/{budget_id}", delete(delete_budget))
        .route("/budgets/{budget_id}/items", put(replace_items))
}

/// One line item in a budget request.
#[derive(Debug, Deserialize)]
pub struct BudgetItemRequest {
    /// Line description.
    pub description: String,
    /// Quantity in the given unit.
    pub quantity: Decimal,
    /// Unit of measure (m², m³, unidade, ...).
    pub unit: String,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Request payload for creating a budget.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequest {
    /// Budget title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Validity date of the quote.
    pub valid_until: Option<NaiveDate>,
    /// Client the quote is for.
    pub client_id: Uuid,
    /// Optional linked project.
    pub project_id: Option<Uuid>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<BudgetItemRequest>,
}

/// Request payload for updating a budget header.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    /// Budget title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<Option<String>>,
    /// Lifecycle status.
    pub status: Option<BudgetStatus>,
    /// Validity date.
    pub valid_until: Option<Option<NaiveDate>>,
}

/// Request payload for replacing budget items.
#[derive(Debug, Deserialize)]
pub struct ReplaceItemsRequest {
    /// The new, complete set of line items.
    pub items: Vec<BudgetItemRequest>,
}

/// Query filters for listing budgets.
#[derive(Debug, Deserialize)]
pub struct ListBudgetsQuery {
    /// Filter by client.
    pub client_id: Option<Uuid>,
}

/// Budget with its line items.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    /// The budget header.
    #[serde(flatten)]
    pub budget: budgets::Model,
    /// Line items.
    pub items: Vec<budget_items::Model>,
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
            "message": "Budget not found"
        })),
    )
        .into_response()
}

fn validate_items(items: &[BudgetItemRequest]) -> Option<Response> {
    for item in items {
        if item.description.trim().is_empty()
            || item.quantity <= Decimal::ZERO
            || item.unit_price < Decimal::ZERO
        {
            return Some(
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "validation_error",
                        "message": "items need a description, a positive quantity, and a non-negative unit price"
                    })),
                )
                    .into_response(),
            );
        }
    }
    None
}

fn to_item_inputs(items: Vec<BudgetItemRequest>) -> Vec<BudgetItemInput> {
    items
        .into_iter()
        .map(|item| BudgetItemInput {
            description: item.description,
            quantity: item.quantity,
            unit: item.unit,
            unit_price: item.unit_price,
        })
        .collect()
}

/// POST /budgets - Create a budget with its line items.
async fn create_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateBudgetRequest>,
) -> Response {
    if payload.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "title is required"
            })),
        )
            .into_response();
    }
    if let Some(response) = validate_items(&payload.items) {
        return response;
    }

    let client_repo = ClientRepository::new((*state.db).clone());
    match client_repo.find_by_id(payload.client_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "client does not exist"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to check client");
            return internal_error();
        }
    }

    let repo = BudgetRepository::new((*state.db).clone());
    match repo
        .create(
            CreateBudgetInput {
                title: payload.title,
                description: payload.description,
                valid_until: payload.valid_until,
                client_id: payload.client_id,
                project_id: payload.project_id,
                items: to_item_inputs(payload.items),
            },
            auth.user_id(),
        )
        .await
    {
        Ok((budget, items)) => {
            info!(budget_id = %budget.id, total = %budget.total_value, "Budget created");
            (StatusCode::CREATED, Json(BudgetResponse { budget, items })).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create budget");
            internal_error()
        }
    }
}

/// GET /budgets - List budgets.
async fn list_budgets(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(page): Query<PageRequest>,
    Query(filter): Query<ListBudgetsQuery>,
) -> Response {
    let repo = BudgetRepository::new((*state.db).clone());

    match repo
        .list(filter.client_id, page.offset(), page.limit())
        .await
    {
        Ok((budgets, total)) => {
            let response = PageResponse::new(budgets, page.page, page.per_page, total);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list budgets");
            internal_error()
        }
    }
}

/// GET `/budgets/{budget_id}` - Get a budget with its items.
async fn get_budget(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(budget_id): Path<Uuid>,
) -> Response {
    let repo = BudgetRepository::new((*state.db).clone());

    match repo.find_by_id(budget_id).await {
        Ok(Some((budget, items))) => {
            (StatusCode::OK, Json(BudgetResponse { budget, items })).into_response()
        }
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load budget");
            internal_error()
        }
    }
}

/// PATCH `/budgets/{budget_id}` - Update the budget header.
async fn update_budget(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(budget_id): Path<Uuid>,
    Json(payload): Json<UpdateBudgetRequest>,
) -> Response {
    let repo = BudgetRepository::new((*state.db).clone());

    let budget = match repo.find_by_id(budget_id).await {
        Ok(Some((b, _))) => b,
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load budget");
            return internal_error();
        }
    };

    match repo
        .update(
            budget,
            UpdateBudgetInput {
                title: payload.title,
                description: payload.description,
                status: payload.status,
                valid_until: payload.valid_until,
            },
        )
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update budget");
            internal_error()
        }
    }
}

/// PUT `/budgets/{budget_id}/items` - Replace all line items.
async fn replace_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(budget_id): Path<Uuid>,
    Json(payload): Json<ReplaceItemsRequest>,
) -> Response {
    if let Some(response) = validate_items(&payload.items) {
        return response;
    }

    let repo = BudgetRepository::new((*state.db).clone());

    match repo.find_by_id(budget_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load budget");
            return internal_error();
        }
    }

    match repo
        .replace_items(budget_id, to_item_inputs(payload.items))
        .await
    {
        Ok((budget, items)) => {
            info!(budget_id = %budget.id, total = %budget.total_value, "Budget items replaced");
            (StatusCode::OK, Json(BudgetResponse { budget, items })).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to replace budget items");
            internal_error()
        }
    }
}

/// DELETE `/budgets/{budget_id}` - Delete a budget.
async fn delete_budget(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(budget_id): Path<Uuid>,
) -> Response {
    let repo = BudgetRepository::new((*state.db).clone());

    match repo.delete(budget_id).await {
        Ok(0) => not_found(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete budget");
            internal_error()
        }
    }
}
