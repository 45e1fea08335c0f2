//! Employee management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use atelier_db::EmployeeRepository;
use atelier_db::entities::sea_orm_active_enums::EmployeeRole;
use atelier_db::repositories::{CreateEmployeeInput, UpdateEmployeeInput};
use atelier_shared::types::{PageRequest, PageResponse};

/// Creates the employees router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", post(create_employee))
        .route("/employees", get(list_employees))
        .route("/employees/{employee_id}", get(get_employee))
        .route("/employees/{employee_id}", patch(update_employee))
}

/// Request payload for creating an employee.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Employee name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Studio role.
    pub role: EmployeeRole,
    /// Hourly billing rate.
    pub hourly_rate: Option<Decimal>,
}

/// Request payload for updating an employee.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// Employee name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Studio role.
    pub role: Option<EmployeeRole>,
    /// Hourly billing rate.
    pub hourly_rate: Option<Option<Decimal>>,
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
            "message": "Employee not found"
        })),
    )
        .into_response()
}

/// POST /employees - Create a new employee.
async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateEmployeeRequest>,
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

    let repo = EmployeeRepository::new((*state.db).clone());
    match repo
        .create(
            CreateEmployeeInput {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                role: payload.role,
                hourly_rate: payload.hourly_rate,
            },
            auth.user_id(),
        )
        .await
    {
        Ok(employee) => {
            info!(employee_id = %employee.id, created_by = %auth.user_id(), "Employee created");
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create employee");
            internal_error()
        }
    }
}

/// GET /employees - List employees.
async fn list_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Response {
    let repo = EmployeeRepository::new((*state.db).clone());

    match repo.list(page.offset(), page.limit()).await {
        Ok((employees, total)) => {
            let response = PageResponse::new(employees, page.page, page.per_page, total);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list employees");
            internal_error()
        }
    }
}

/// GET `/employees/{employee_id}` - Get employee details.
async fn get_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(employee_id): Path<Uuid>,
) -> Response {
    let repo = EmployeeRepository::new((*state.db).clone());

    match repo.find_by_id(employee_id).await {
        Ok(Some(employee)) => (StatusCode::OK, Json(employee)).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load employee");
            internal_error()
        }
    }
}

/// PATCH `/employees/{employee_id}` - Update an employee.
async fn update_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(employee_id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Response {
    let repo = EmployeeRepository::new((*state.db).clone());

    let employee = match repo.find_by_id(employee_id).await {
        Ok(Some(e)) => e,
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load employee");
            return internal_error();
        }
    };

    match repo
        .update(
            employee,
            UpdateEmployeeInput {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                role: payload.role,
                hourly_rate: payload.hourly_rate,
                is_active: payload.is_active,
            },
        )
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update employee");
            internal_error()
        }
    }
}
