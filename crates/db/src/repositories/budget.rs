//! Budget repository for database operations.
//!
//! A budget and its line items always change together: items are
//! replaced atomically in one transaction and `total_value` is
//! recomputed server-side from the items.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{budget_items, budgets, sea_orm_active_enums::BudgetStatus};

/// One budget line item as supplied by the caller.
#[derive(Debug, Clone)]
pub struct BudgetItemInput {
    /// Line description.
    pub description: String,
    /// Quantity in the given unit.
    pub quantity: Decimal,
    /// Unit of measure (m², m³, unidade, ...).
    pub unit: String,
    /// Price per unit.
    pub unit_price: Decimal,
}

impl BudgetItemInput {
    fn total_price(&self) -> Decimal {
        (self.quantity * self.unit_price).round_dp(2)
    }
}

/// Input for creating a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetInput {
    /// Budget title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Validity date of the quote.
    pub valid_until: Option<NaiveDate>,
    /// Client the quote is for.
    pub client_id: Uuid,
    /// Optional linked project.
    pub project_id: Option<Uuid>,
    /// Line items.
    pub items: Vec<BudgetItemInput>,
}

/// Input for updating a budget header. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetInput {
    /// Budget title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<Option<String>>,
    /// Lifecycle status.
    pub status: Option<BudgetStatus>,
    /// Validity date of the quote.
    pub valid_until: Option<Option<NaiveDate>>,
}

/// Budget repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a budget with its line items in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert in the transaction fails.
    pub async fn create(
        &self,
        input: CreateBudgetInput,
        created_by: Uuid,
    ) -> Result<(budgets::Model, Vec<budget_items::Model>), DbErr> {
        let txn = self.db.begin().await?;

        let now = chrono::Utc::now().into();
        let budget_id = Uuid::new_v4();
        let total_value: Decimal = input.items.iter().map(BudgetItemInput::total_price).sum();

        let budget = budgets::ActiveModel {
            id: Set(budget_id),
            title: Set(input.title),
            description: Set(input.description),
            status: Set(BudgetStatus::Draft),
            total_value: Set(total_value),
            valid_until: Set(input.valid_until),
            client_id: Set(input.client_id),
            project_id: Set(input.project_id),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let budget = budget.insert(&txn).await?;

        let mut items = Vec::with_capacity(input.items.len());
        for item in input.items {
            let total_price = item.total_price();
            let model = budget_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                description: Set(item.description),
                quantity: Set(item.quantity),
                unit: Set(item.unit),
                unit_price: Set(item.unit_price),
                total_price: Set(total_price),
                budget_id: Set(budget_id),
            };
            items.push(model.insert(&txn).await?);
        }

        txn.commit().await?;

        Ok((budget, items))
    }

    /// Finds a budget with its line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<(budgets::Model, Vec<budget_items::Model>)>, DbErr> {
        let Some(budget) = budgets::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let items = budget_items::Entity::find()
            .filter(budget_items::Column::BudgetId.eq(id))
            .all(&self.db)
            .await?;

        Ok(Some((budget, items)))
    }

    /// Lists budgets, newest first, optionally for one client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        client_id: Option<Uuid>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<budgets::Model>, u64), DbErr> {
        let mut query = budgets::Entity::find().order_by_desc(budgets::Column::CreatedAt);

        if let Some(client_id) = client_id {
            query = query.filter(budgets::Column::ClientId.eq(client_id));
        }

        let total = query.clone().count(&self.db).await?;
        let items = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((items, total))
    }

    /// Applies a partial update to the budget header.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        model: budgets::Model,
        input: UpdateBudgetInput,
    ) -> Result<budgets::Model, DbErr> {
        let mut budget: budgets::ActiveModel = model.into();

        if let Some(title) = input.title {
            budget.title = Set(title);
        }
        if let Some(description) = input.description {
            budget.description = Set(description);
        }
        if let Some(status) = input.status {
            budget.status = Set(status);
        }
        if let Some(valid_until) = input.valid_until {
            budget.valid_until = Set(valid_until);
        }
        budget.updated_at = Set(chrono::Utc::now().into());

        budget.update(&self.db).await
    }

    /// Replaces the line items of a budget and recomputes its total,
    /// all in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement in the transaction fails.
    pub async fn replace_items(
        &self,
        budget_id: Uuid,
        items: Vec<BudgetItemInput>,
    ) -> Result<(budgets::Model, Vec<budget_items::Model>), DbErr> {
        let txn = self.db.begin().await?;

        budget_items::Entity::delete_many()
            .filter(budget_items::Column::BudgetId.eq(budget_id))
            .exec(&txn)
            .await?;

        let total_value: Decimal = items.iter().map(BudgetItemInput::total_price).sum();

        let mut inserted = Vec::with_capacity(items.len());
        for item in items {
            let total_price = item.total_price();
            let model = budget_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                description: Set(item.description),
                quantity: Set(item.quantity),
                unit: Set(item.unit),
                unit_price: Set(item.unit_price),
                total_price: Set(total_price),
                budget_id: Set(budget_id),
            };
            inserted.push(model.insert(&txn).await?);
        }

        let budget = budgets::ActiveModel {
            id: Set(budget_id),
            total_value: Set(total_value),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let budget = budget.update(&txn).await?;

        txn.commit().await?;

        Ok((budget, inserted))
    }

    /// Deletes a budget. Line items cascade in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = budgets::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
