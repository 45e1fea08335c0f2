//! Employee repository for database operations.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{employees, sea_orm_active_enums::EmployeeRole};

/// Input for creating an employee.
#[derive(Debug, Clone)]
pub struct CreateEmployeeInput {
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

/// Input for updating an employee. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeInput {
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

/// Employee repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    db: DatabaseConnection,
}

impl EmployeeRepository {
    /// Creates a new employee repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateEmployeeInput,
        created_by: Uuid,
    ) -> Result<employees::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let employee = employees::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            role: Set(input.role),
            hourly_rate: Set(input.hourly_rate),
            is_active: Set(true),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        employee.insert(&self.db).await
    }

    /// Finds an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<employees::Model>, DbErr> {
        employees::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists employees ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<employees::Model>, u64), DbErr> {
        let query = employees::Entity::find().order_by_asc(employees::Column::Name);

        let total = query.clone().count(&self.db).await?;
        let items = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((items, total))
    }

    /// Applies a partial update to an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        model: employees::Model,
        input: UpdateEmployeeInput,
    ) -> Result<employees::Model, DbErr> {
        let mut employee: employees::ActiveModel = model.into();

        if let Some(name) = input.name {
            employee.name = Set(name);
        }
        if let Some(email) = input.email {
            employee.email = Set(email);
        }
        if let Some(phone) = input.phone {
            employee.phone = Set(phone);
        }
        if let Some(role) = input.role {
            employee.role = Set(role);
        }
        if let Some(hourly_rate) = input.hourly_rate {
            employee.hourly_rate = Set(hourly_rate);
        }
        if let Some(is_active) = input.is_active {
            employee.is_active = Set(is_active);
        }
        employee.updated_at = Set(chrono::Utc::now().into());

        employee.update(&self.db).await
    }
}
