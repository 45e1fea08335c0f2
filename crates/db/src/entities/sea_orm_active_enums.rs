//! `SeaORM` active enums mapped to PostgreSQL enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of architecture project.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_type")]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Residential project.
    #[sea_orm(string_value = "residential")]
    Residential,
    /// Commercial project.
    #[sea_orm(string_value = "commercial")]
    Commercial,
    /// Industrial project.
    #[sea_orm(string_value = "industrial")]
    Industrial,
    /// Renovation of an existing building.
    #[sea_orm(string_value = "renovation")]
    Renovation,
    /// Landscape design.
    #[sea_orm(string_value = "landscape")]
    Landscape,
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_status")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Initial planning phase.
    #[sea_orm(string_value = "planning")]
    Planning,
    /// Work in progress.
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Under review.
    #[sea_orm(string_value = "review")]
    Review,
    /// Completed.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Kind of project task.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_type")]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Design work.
    #[sea_orm(string_value = "design")]
    Design,
    /// Documentation.
    #[sea_orm(string_value = "documentation")]
    Documentation,
    /// Review.
    #[sea_orm(string_value = "review")]
    Review,
    /// Approval step.
    #[sea_orm(string_value = "approval")]
    Approval,
    /// Construction work.
    #[sea_orm(string_value = "construction")]
    Construction,
    /// Site inspection.
    #[sea_orm(string_value = "inspection")]
    Inspection,
    /// Meeting.
    #[sea_orm(string_value = "meeting")]
    Meeting,
    /// Anything else.
    #[sea_orm(string_value = "other")]
    Other,
}

/// Lifecycle status of a project task.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    #[sea_orm(string_value = "todo")]
    Todo,
    /// In progress.
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Under review.
    #[sea_orm(string_value = "review")]
    Review,
    /// Completed.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Priority of a project task.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_priority")]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority.
    #[sea_orm(string_value = "low")]
    Low,
    /// Medium priority.
    #[sea_orm(string_value = "medium")]
    Medium,
    /// High priority.
    #[sea_orm(string_value = "high")]
    High,
    /// Critical priority.
    #[sea_orm(string_value = "critical")]
    Critical,
}

/// Lifecycle status of a budget (quote).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "budget_status")]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Sent to the client.
    #[sea_orm(string_value = "sent")]
    Sent,
    /// Approved by the client.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected by the client.
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Validity date passed.
    #[sea_orm(string_value = "expired")]
    Expired,
}

/// Role of an employee in the studio.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "employee_role")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Architect.
    #[sea_orm(string_value = "architect")]
    Architect,
    /// Engineer.
    #[sea_orm(string_value = "engineer")]
    Engineer,
    /// Technician.
    #[sea_orm(string_value = "technician")]
    Technician,
    /// Supervisor.
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
    /// Intern.
    #[sea_orm(string_value = "intern")]
    Intern,
}

/// Role of an employee on a specific project.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "assignment_role")]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRole {
    /// Lead architect for the project.
    #[sea_orm(string_value = "lead_architect")]
    LeadArchitect,
    /// Architect.
    #[sea_orm(string_value = "architect")]
    Architect,
    /// Engineer.
    #[sea_orm(string_value = "engineer")]
    Engineer,
    /// Supervisor.
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
    /// Technician.
    #[sea_orm(string_value = "technician")]
    Technician,
}

/// Kind of calendar event.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_type")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Meeting.
    #[sea_orm(string_value = "meeting")]
    Meeting,
    /// Site visit.
    #[sea_orm(string_value = "site_visit")]
    SiteVisit,
    /// Presentation.
    #[sea_orm(string_value = "presentation")]
    Presentation,
    /// Deadline.
    #[sea_orm(string_value = "deadline")]
    Deadline,
    /// Milestone.
    #[sea_orm(string_value = "milestone")]
    Milestone,
}

/// Lifecycle status of a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Scheduled.
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    /// Confirmed by attendees.
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    /// Completed.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}
