//! `SeaORM` entity definitions.

pub mod budget_items;
pub mod budgets;
pub mod calendar_events;
pub mod clients;
pub mod employees;
pub mod project_assignments;
pub mod project_tasks;
pub mod projects;
pub mod sea_orm_active_enums;
pub mod users;
