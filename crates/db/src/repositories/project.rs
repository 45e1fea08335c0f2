//! Project repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{
    project_assignments, projects,
    sea_orm_active_enums::{AssignmentRole, ProjectStatus, ProjectType},
};

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
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

/// Input for updating a project. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
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

/// Filter options for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Filter by lifecycle status.
    pub status: Option<ProjectStatus>,
    /// Filter by owning client.
    pub client_id: Option<Uuid>,
}

/// Project repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: DatabaseConnection,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new project in the planning status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateProjectInput,
        created_by: Uuid,
    ) -> Result<projects::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let project = projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            description: Set(input.description),
            r#type: Set(input.r#type),
            status: Set(ProjectStatus::Planning),
            address: Set(input.address),
            total_area: Set(input.total_area),
            estimated_value: Set(input.estimated_value),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            client_id: Set(input.client_id),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        project.insert(&self.db).await
    }

    /// Finds a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<projects::Model>, DbErr> {
        projects::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists projects, newest first, with optional status/client filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: ProjectFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<projects::Model>, u64), DbErr> {
        let mut query =
            projects::Entity::find().order_by_desc(projects::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(projects::Column::Status.eq(status));
        }
        if let Some(client_id) = filter.client_id {
            query = query.filter(projects::Column::ClientId.eq(client_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((items, total))
    }

    /// Applies a partial update to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        model: projects::Model,
        input: UpdateProjectInput,
    ) -> Result<projects::Model, DbErr> {
        let mut project: projects::ActiveModel = model.into();

        if let Some(title) = input.title {
            project.title = Set(title);
        }
        if let Some(description) = input.description {
            project.description = Set(description);
        }
        if let Some(status) = input.status {
            project.status = Set(status);
        }
        if let Some(address) = input.address {
            project.address = Set(address);
        }
        if let Some(total_area) = input.total_area {
            project.total_area = Set(total_area);
        }
        if let Some(estimated_value) = input.estimated_value {
            project.estimated_value = Set(estimated_value);
        }
        if let Some(start_date) = input.start_date {
            project.start_date = Set(start_date);
        }
        if let Some(end_date) = input.end_date {
            project.end_date = Set(end_date);
        }
        project.updated_at = Set(chrono::Utc::now().into());

        project.update(&self.db).await
    }

    /// Deletes a project. Tasks and assignments cascade in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = projects::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    /// Assigns an employee to a project with a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn assign_employee(
        &self,
        project_id: Uuid,
        employee_id: Uuid,
        role: AssignmentRole,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<project_assignments::Model, DbErr> {
        let assignment = project_assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(project_id),
            employee_id: Set(employee_id),
            role: Set(role),
            start_date: Set(start_date),
            end_date: Set(end_date),
            assigned_at: Set(chrono::Utc::now().into()),
        };

        assignment.insert(&self.db).await
    }

    /// Lists the assignments for a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_assignments(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<project_assignments::Model>, DbErr> {
        project_assignments::Entity::find()
            .filter(project_assignments::Column::ProjectId.eq(project_id))
            .order_by_asc(project_assignments::Column::AssignedAt)
            .all(&self.db)
            .await
    }
}
