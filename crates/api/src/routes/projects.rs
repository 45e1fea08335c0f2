//! Project management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use atelier_db::repositories::{
    CreateProjectInput, ProjectFilter, UpdateProjectInput,
};
use atelier_db::{ClientRepository, EmployeeRepository, ProjectRepository};
use atelier_db::entities::sea_orm_active_enums::{
    AssignmentRole, ProjectStatus, ProjectType,
};
use atelier_shared::types::{PageRequest, PageResponse};

/// Creates the projects router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects", get(list_projects))
        .route("/projects/{project_id}", get(get_project))
        .route("/projects/{project_id}", patch(update_project))
        .route("/projects/{project_id}", delete(delete_project))
        .route("/projects/{project_id}/assignments", post(assign_employee))
        .route("/projects/{project_id}/assignments", get(list_assignments))
}

/// Request payload for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Kind of project.
    pub r#type: ProjectType,
    /// Site address.
    pub address: Option<String>,
    /// Total area in m².
    pub total_area: Option<Decimal>,
    /// Estimated contract value.
    pub estimated_value: Option<Decimal>,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Owning client.
    pub client_id: Uuid,
}

/// Request payload for updating a project.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    /// Project title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<Option<String>>,
    /// Lifecycle status.
    pub status: Option<ProjectStatus>,
    /// Site address.
    pub address: Option<Option<String>>,
    /// Total area in m².
    pub total_area: Option<Option<Decimal>>,
    /// Estimated contract value.
    pub estimated_value: Option<Option<Decimal>>,
    /// Planned start date.
    pub start_date: Option<Option<NaiveDate>>,
    /// Planned end date.
    pub end_date: Option<Option<NaiveDate>>,
}

/// Query filters for listing projects.
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// Filter by lifecycle status.
    pub status: Option<ProjectStatus>,
    /// Filter by owning client.
    pub client_id: Option<Uuid>,
}

/// Request payload for assigning an employee to a project.
#[derive(Debug, Deserialize)]
pub struct AssignEmployeeRequest {
    /// Employee to assign.
    pub employee_id: Uuid,
    /// Role on this project.
    pub role: AssignmentRole,
    /// Assignment start date.
    pub start_date: NaiveDate,
    /// Assignment end date.
    pub end_date: Option<NaiveDate>,
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
            "message": "Project not found"
        })),
    )
        .into_response()
}

/// POST /projects - Create a new project.
async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateProjectRequest>,
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

    // The owning client must exist
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

    let repo = ProjectRepository::new((*state.db).clone());
    match repo
        .create(
            CreateProjectInput {
                title: payload.title,
                description: payload.description,
                r#type: payload.r#type,
                address: payload.address,
                total_area: payload.total_area,
                estimated_value: payload.estimated_value,
                start_date: payload.start_date,
                end_date: payload.end_date,
                client_id: payload.client_id,
            },
            auth.user_id(),
        )
        .await
    {
        Ok(project) => {
            info!(project_id = %project.id, created_by = %auth.user_id(), "Project created");
            (StatusCode::CREATED, Json(project)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create project");
            internal_error()
        }
    }
}

/// GET /projects - List projects with optional filters.
async fn list_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(page): Query<PageRequest>,
    Query(filter): Query<ListProjectsQuery>,
) -> Response {
    let repo = ProjectRepository::new((*state.db).clone());

    let filter = ProjectFilter {
        status: filter.status,
        client_id: filter.client_id,
    };

    match repo.list(filter, page.offset(), page.limit()).await {
        Ok((projects, total)) => {
            let response = PageResponse::new(projects, page.page, page.per_page, total);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list projects");
            internal_error()
        }
    }
}

/// GET `/projects/{project_id}` - Get project details.
async fn get_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Response {
    let repo = ProjectRepository::new((*state.db).clone());

    match repo.find_by_id(project_id).await {
        Ok(Some(project)) => (StatusCode::OK, Json(project)).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load project");
            internal_error()
        }
    }
}

/// PATCH `/projects/{project_id}` - Update a project.
async fn update_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Response {
    let repo = ProjectRepository::new((*state.db).clone());

    let project = match repo.find_by_id(project_id).await {
        Ok(Some(p)) => p,
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load project");
            return internal_error();
        }
    };

    match repo
        .update(
            project,
            UpdateProjectInput {
                title: payload.title,
                description: payload.description,
                status: payload.status,
                address: payload.address,
                total_area: payload.total_area,
                estimated_value: payload.estimated_value,
                start_date: payload.start_date,
                end_date: payload.end_date,
            },
        )
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update project");
            internal_error()
        }
    }
}

/// DELETE `/projects/{project_id}` - Delete a project.
async fn delete_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Response {
    let repo = ProjectRepository::new((*state.db).clone());

    match repo.delete(project_id).await {
        Ok(0) => not_found(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete project");
            internal_error()
        }
    }
}

/// POST `/projects/{project_id}/assignments` - Assign an employee.
async fn assign_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<AssignEmployeeRequest>,
) -> Response {
    let repo = ProjectRepository::new((*state.db).clone());

    match repo.find_by_id(project_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load project");
            return internal_error();
        }
    }

    let employee_repo = EmployeeRepository::new((*state.db).clone());
    match employee_repo.find_by_id(payload.employee_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "employee does not exist"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to check employee");
            return internal_error();
        }
    }

    match repo
        .assign_employee(
            project_id,
            payload.employee_id,
            payload.role,
            payload.start_date,
            payload.end_date,
        )
        .await
    {
        Ok(assignment) => (StatusCode::CREATED, Json(assignment)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to assign employee");
            internal_error()
        }
    }
}

/// GET `/projects/{project_id}/assignments` - List project assignments.
async fn list_assignments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Response {
    let repo = ProjectRepository::new((*state.db).clone());

    match repo.list_assignments(project_id).await {
        Ok(assignments) => (StatusCode::OK, Json(assignments)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list assignments");
            internal_error()
        }
    }
}
