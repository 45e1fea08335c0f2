//! Calendar event routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use atelier_db::CalendarEventRepository;
use atelier_db::entities::sea_orm_active_enums::{EventStatus, EventType};
use atelier_db::repositories::{CreateEventInput, EventFilter, UpdateEventInput};
use atelier_shared::types::{PageRequest, PageResponse};

/// Creates the events router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events", get(list_events))
        .route("/events/{event_id}", get(get_event))
        .route("/events/{event_id}", patch(update_event))
        .route("/events/{event_id}", delete(delete_event))
}

/// Request payload for creating a calendar event.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Kind of event.
    pub r#type: EventType,
    /// Start of the event (RFC 3339).
    pub start_time: DateTime<FixedOffset>,
    /// End of the event (RFC 3339).
    pub end_time: DateTime<FixedOffset>,
    /// Where the event takes place.
    pub location: Option<String>,
    /// Optional linked project.
    pub project_id: Option<Uuid>,
    /// Optional linked client.
    pub client_id: Option<Uuid>,
    /// Optional responsible employee.
    pub assigned_employee_id: Option<Uuid>,
}

/// Request payload for updating a calendar event.
#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    /// Event title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<Option<String>>,
    /// Lifecycle status.
    pub status: Option<EventStatus>,
    /// Start of the event.
    pub start_time: Option<DateTime<FixedOffset>>,
    /// End of the event.
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Where the event takes place.
    pub location: Option<Option<String>>,
}

/// Query filters for listing events.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Only events starting at or after this instant.
    pub from: Option<DateTime<FixedOffset>>,
    /// Only events starting before this instant.
    pub until: Option<DateTime<FixedOffset>>,
    /// Filter by linked project.
    pub project_id: Option<Uuid>,
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
            "message": "Event not found"
        })),
    )
        .into_response()
}

fn time_order_error() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": "end_time must be after start_time"
        })),
    )
        .into_response()
}

/// POST /events - Schedule a new event.
async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateEventRequest>,
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
    if payload.end_time <= payload.start_time {
        return time_order_error();
    }

    let repo = CalendarEventRepository::new((*state.db).clone());
    match repo
        .create(
            CreateEventInput {
                title: payload.title,
                description: payload.description,
                r#type: payload.r#type,
                start_time: payload.start_time,
                end_time: payload.end_time,
                location: payload.location,
                project_id: payload.project_id,
                client_id: payload.client_id,
                assigned_employee_id: payload.assigned_employee_id,
            },
            auth.user_id(),
        )
        .await
    {
        Ok(event) => {
            info!(event_id = %event.id, created_by = %auth.user_id(), "Event created");
            (StatusCode::CREATED, Json(event)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create event");
            internal_error()
        }
    }
}

/// GET /events - List events with optional range/project filters.
async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(page): Query<PageRequest>,
    Query(filter): Query<ListEventsQuery>,
) -> Response {
    let repo = CalendarEventRepository::new((*state.db).clone());

    let filter = EventFilter {
        from: filter.from,
        until: filter.until,
        project_id: filter.project_id,
    };

    match repo.list(filter, page.offset(), page.limit()).await {
        Ok((events, total)) => {
            let response = PageResponse::new(events, page.page, page.per_page, total);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list events");
            internal_error()
        }
    }
}

/// GET `/events/{event_id}` - Get event details.
async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Response {
    let repo = CalendarEventRepository::new((*state.db).clone());

    match repo.find_by_id(event_id).await {
        Ok(Some(event)) => (StatusCode::OK, Json(event)).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load event");
            internal_error()
        }
    }
}

/// PATCH `/events/{event_id}` - Update an event.
async fn update_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> Response {
    let repo = CalendarEventRepository::new((*state.db).clone());

    let event = match repo.find_by_id(event_id).await {
        Ok(Some(e)) => e,
        Ok(None) => return not_found(),
        Err(e) => {
            error!(error = %e, "Failed to load event");
            return internal_error();
        }
    };

    // The stored pair must stay ordered after applying either edit
    let start_time = payload.start_time.unwrap_or(event.start_time);
    let end_time = payload.end_time.unwrap_or(event.end_time);
    if end_time <= start_time {
        return time_order_error();
    }

    match repo
        .update(
            event,
            UpdateEventInput {
                title: payload.title,
                description: payload.description,
                status: payload.status,
                start_time: payload.start_time,
                end_time: payload.end_time,
                location: payload.location,
            },
        )
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update event");
            internal_error()
        }
    }
}

/// DELETE `/events/{event_id}` - Delete an event.
async fn delete_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Response {
    let repo = CalendarEventRepository::new((*state.db).clone());

    match repo.delete(event_id).await {
        Ok(0) => not_found(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete event");
            internal_error()
        }
    }
}
