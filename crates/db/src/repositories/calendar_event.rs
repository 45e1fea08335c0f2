//! Calendar event repository for database operations.

use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{
    calendar_events,
    sea_orm_active_enums::{EventStatus, EventType},
};

/// Input for creating a calendar event.
#[derive(Debug, Clone)]
pub struct CreateEventInput {
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Kind of event.
    pub r#type: EventType,
    /// Start of the event.
    pub start_time: DateTime<FixedOffset>,
    /// End of the event.
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

/// Input for updating a calendar event. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventInput {
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

/// Filter options for listing calendar events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Only events starting at or after this instant.
    pub from: Option<DateTime<FixedOffset>>,
    /// Only events starting before this instant.
    pub until: Option<DateTime<FixedOffset>>,
    /// Filter by linked project.
    pub project_id: Option<Uuid>,
}

/// Calendar event repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CalendarEventRepository {
    db: DatabaseConnection,
}

impl CalendarEventRepository {
    /// Creates a new calendar event repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event in the scheduled status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateEventInput,
        created_by: Uuid,
    ) -> Result<calendar_events::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let event = calendar_events::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            description: Set(input.description),
            r#type: Set(input.r#type),
            status: Set(EventStatus::Scheduled),
            start_time: Set(input.start_time),
            end_time: Set(input.end_time),
            location: Set(input.location),
            project_id: Set(input.project_id),
            client_id: Set(input.client_id),
            assigned_employee_id: Set(input.assigned_employee_id),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        event.insert(&self.db).await
    }

    /// Finds an event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<calendar_events::Model>, DbErr> {
        calendar_events::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists events in start-time order with optional range/project filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: EventFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<calendar_events::Model>, u64), DbErr> {
        let mut query =
            calendar_events::Entity::find().order_by_asc(calendar_events::Column::StartTime);

        if let Some(from) = filter.from {
            query = query.filter(calendar_events::Column::StartTime.gte(from));
        }
        if let Some(until) = filter.until {
            query = query.filter(calendar_events::Column::StartTime.lt(until));
        }
        if let Some(project_id) = filter.project_id {
            query = query.filter(calendar_events::Column::ProjectId.eq(project_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((items, total))
    }

    /// Applies a partial update to an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        model: calendar_events::Model,
        input: UpdateEventInput,
    ) -> Result<calendar_events::Model, DbErr> {
        let mut event: calendar_events::ActiveModel = model.into();

        if let Some(title) = input.title {
            event.title = Set(title);
        }
        if let Some(description) = input.description {
            event.description = Set(description);
        }
        if let Some(status) = input.status {
            event.status = Set(status);
        }
        if let Some(start_time) = input.start_time {
            event.start_time = Set(start_time);
        }
        if let Some(end_time) = input.end_time {
            event.end_time = Set(end_time);
        }
        if let Some(location) = input.location {
            event.location = Set(location);
        }
        event.updated_at = Set(chrono::Utc::now().into());

        event.update(&self.db).await
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = calendar_events::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
