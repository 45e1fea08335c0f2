//! Project task routes.
//!
//! Tasks are created and listed through their project; individual
//! tasks are addressed directly under `/tasks`.

use axum::{
    Json, Router,
    extract::{Path, State},
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
use atelier_db::entities::sea_orm_active_enums::{TaskPriority, TaskStatus, TaskType};
use atelier_db::repositories::{CreateTaskInput, UpdateTaskInput};
use atelier_db::{ProjectRepository, ProjectTaskRepository};

/// Creates the task router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{project_id}/tasks", post(create_task))
        .route("/projects/{project_id}/tasks", get(list_tasks))
        .route("/tasks/{task_id}", get(get_task))
        .route("/tasks/{task_id}", patch(update_task))
        .route("/tasks/{task_id}", delete(delete_task))
}

/// Request payload for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Kind of task.
    #[serde(default = "default_task_type")]
    pub r#type: TaskType,
    /// Priority.
    #[serde(default = "default_task_priority")]
    pub priority: TaskPriority,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Assigned employee.
    pub assignee_id: Option<Uuid>,
}

fn default_task_type() -> TaskType {
    TaskType::Other
}

fn default_task_priority() -> TaskPriority {
    TaskPriority::Medium
}

/// Request payload for updating a task.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// Task title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<Option<String>>,
    /// Lifecycle status.
    pub status: Option<TaskStatus>,
    /// Priority.
    pub priority: Option<TaskPriority>,
    /// Due date.
    pub due_date: Option<Option<NaiveDate>>,
    /// Completion percentage 0-100.
    pub progress: Option<Option<Decimal>>,
    /// Free-form notes.
    pub notes: Option<Option<String>>,
    /// Assigned employee.
    pub assignee_id: Option<Option<Uuid>>,
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

fn not_found(message: &'static str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": message
        })),
    )
        .into_response()
}

/// POST `/projects/{project_id}/tasks` - Create a task on a project.
async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<CreateTaskRequest>,
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

    let project_repo = ProjectRepository::new((*state.db).clone());
    match project_repo.find_by_id(project_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found("Project not found"),
        Err(e) => {
            error!(error = %e, "Failed to load project");
            return internal_error();
        }
    }

    let repo = ProjectTaskRepository::new((*state.db).clone());
    match repo
        .create(
            project_id,
            CreateTaskInput {
                title: payload.title,
                description: payload.description,
                r#type: payload.r#type,
                priority: payload.priority,
                due_date: payload.due_date,
                notes: payload.notes,
                assignee_id: payload.assignee_id,
            },
            auth.user_id(),
        )
        .await
    {
        Ok(task) => {
            info!(task_id = %task.id, project_id = %project_id, "Task created");
            (StatusCode::CREATED, Json(task)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create task");
            internal_error()
        }
    }
}

/// GET `/projects/{project_id}/tasks` - List tasks of a project.
async fn list_tasks(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> Response {
    let project_repo = ProjectRepository::new((*state.db).clone());
    match project_repo.find_by_id(project_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found("Project not found"),
        Err(e) => {
            error!(error = %e, "Failed to load project");
            return internal_error();
        }
    }

    let repo = ProjectTaskRepository::new((*state.db).clone());
    match repo.list_by_project(project_id).await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list tasks");
            internal_error()
        }
    }
}

/// GET `/tasks/{task_id}` - Get task details.
async fn get_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Uuid>,
) -> Response {
    let repo = ProjectTaskRepository::new((*state.db).clone());

    match repo.find_by_id(task_id).await {
        Ok(Some(task)) => (StatusCode::OK, Json(task)).into_response(),
        Ok(None) => not_found("Task not found"),
        Err(e) => {
            error!(error = %e, "Failed to load task");
            internal_error()
        }
    }
}

/// PATCH `/tasks/{task_id}` - Update a task.
async fn update_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Response {
    if let Some(Some(progress)) = payload.progress {
        if progress < Decimal::ZERO || progress > Decimal::from(100) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": "progress must be between 0 and 100"
                })),
            )
                .into_response();
        }
    }

    let repo = ProjectTaskRepository::new((*state.db).clone());

    let task = match repo.find_by_id(task_id).await {
        Ok(Some(t)) => t,
        Ok(None) => return not_found("Task not found"),
        Err(e) => {
            error!(error = %e, "Failed to load task");
            return internal_error();
        }
    };

    match repo
        .update(
            task,
            UpdateTaskInput {
                title: payload.title,
                description: payload.description,
                status: payload.status,
                priority: payload.priority,
                due_date: payload.due_date,
                progress: payload.progress,
                notes: payload.notes,
                assignee_id: payload.assignee_id,
            },
        )
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update task");
            internal_error()
        }
    }
}

/// DELETE `/tasks/{task_id}` - Delete a task.
async fn delete_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Uuid>,
) -> Response {
    let repo = ProjectTaskRepository::new((*state.db).clone());

    match repo.delete(task_id).await {
        Ok(0) => not_found("Task not found"),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete task");
            internal_error()
        }
    }
}
