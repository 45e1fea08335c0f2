//! Project task repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{
    project_tasks,
    sea_orm_active_enums::{TaskPriority, TaskStatus, TaskType},
};

/// Input for creating a project task.
#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Kind of task.
    pub r#type: TaskType,
    /// Priority.
    pub priority: TaskPriority,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Assigned employee.
    pub assignee_id: Option<Uuid>,
}

/// Input for updating a project task. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
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
    /// Completion percentage (0-100).
    pub progress: Option<Option<Decimal>>,
    /// Free-form notes.
    pub notes: Option<Option<String>>,
    /// Assigned employee.
    pub assignee_id: Option<Option<Uuid>>,
}

/// Project task repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProjectTaskRepository {
    db: DatabaseConnection,
}

impl ProjectTaskRepository {
    /// Creates a new project task repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task on a project, starting in `todo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        project_id: Uuid,
        input: CreateTaskInput,
        created_by: Uuid,
    ) -> Result<project_tasks::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let task = project_tasks::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            description: Set(input.description),
            r#type: Set(input.r#type),
            status: Set(TaskStatus::Todo),
            priority: Set(input.priority),
            due_date: Set(input.due_date),
            completed_at: Set(None),
            progress: Set(None),
            notes: Set(input.notes),
            project_id: Set(project_id),
            assignee_id: Set(input.assignee_id),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        task.insert(&self.db).await
    }

    /// Finds a task by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<project_tasks::Model>, DbErr> {
        project_tasks::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists the tasks of a project, most urgent due date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<project_tasks::Model>, DbErr> {
        project_tasks::Entity::find()
            .filter(project_tasks::Column::ProjectId.eq(project_id))
            .order_by_asc(project_tasks::Column::DueDate)
            .order_by_asc(project_tasks::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Applies a partial update to a task.
    ///
    /// Moving a task into `completed` stamps `completed_at`; moving it
    /// back out clears the stamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        model: project_tasks::Model,
        input: UpdateTaskInput,
    ) -> Result<project_tasks::Model, DbErr> {
        let was_completed = model.status == TaskStatus::Completed;
        let mut task: project_tasks::ActiveModel = model.into();

        if let Some(title) = input.title {
            task.title = Set(title);
        }
        if let Some(description) = input.description {
            task.description = Set(description);
        }
        if let Some(status) = input.status {
            match (was_completed, &status) {
                (false, TaskStatus::Completed) => {
                    task.completed_at = Set(Some(chrono::Utc::now().into()));
                }
                (true, s) if *s != TaskStatus::Completed => {
                    task.completed_at = Set(None);
                }
                _ => {}
            }
            task.status = Set(status);
        }
        if let Some(priority) = input.priority {
            task.priority = Set(priority);
        }
        if let Some(due_date) = input.due_date {
            task.due_date = Set(due_date);
        }
        if let Some(progress) = input.progress {
            task.progress = Set(progress);
        }
        if let Some(notes) = input.notes {
            task.notes = Set(notes);
        }
        if let Some(assignee_id) = input.assignee_id {
            task.assignee_id = Set(assignee_id);
        }
        task.updated_at = Set(chrono::Utc::now().into());

        task.update(&self.db).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = project_tasks::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
