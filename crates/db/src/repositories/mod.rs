//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod budget;
pub mod calendar_event;
pub mod client;
pub mod employee;
pub mod project;
pub mod project_task;
pub mod user;

pub use budget::{BudgetItemInput, BudgetRepository, CreateBudgetInput, UpdateBudgetInput};
pub use calendar_event::{
    CalendarEventRepository, CreateEventInput, EventFilter, UpdateEventInput,
};
pub use client::{ClientRepository, CreateClientInput, UpdateClientInput};
pub use employee::{CreateEmployeeInput, EmployeeRepository, UpdateEmployeeInput};
pub use project::{CreateProjectInput, ProjectFilter, ProjectRepository, UpdateProjectInput};
pub use project_task::{CreateTaskInput, ProjectTaskRepository, UpdateTaskInput};
pub use user::{CreateUserInput, UserError, UserRepository};
