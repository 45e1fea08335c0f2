//! Client repository for database operations.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::clients;

/// Input for creating a client.
#[derive(Debug, Clone)]
pub struct CreateClientInput {
    /// Client name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: String,
    /// CPF for individuals.
    pub cpf: Option<String>,
    /// CNPJ for companies.
    pub cnpj: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Input for updating a client. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientInput {
    /// Client name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<Option<String>>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<Option<String>>,
    /// Active flag.
    pub is_active: Option<bool>,
}

/// Client repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: DatabaseConnection,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateClientInput,
        created_by: Uuid,
    ) -> Result<clients::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let client = clients::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            cpf: Set(input.cpf.map(|c| atelier_core::cpf::clean(&c))),
            cnpj: Set(input.cnpj),
            address: Set(input.address),
            is_active: Set(true),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        client.insert(&self.db).await
    }

    /// Finds a client by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<clients::Model>, DbErr> {
        clients::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists clients ordered by name, newest page counts included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<clients::Model>, u64), DbErr> {
        let query = clients::Entity::find().order_by_asc(clients::Column::Name);

        let total = query.clone().count(&self.db).await?;
        let items = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((items, total))
    }

    /// Applies a partial update to a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        model: clients::Model,
        input: UpdateClientInput,
    ) -> Result<clients::Model, DbErr> {
        let mut client: clients::ActiveModel = model.into();

        if let Some(name) = input.name {
            client.name = Set(name);
        }
        if let Some(email) = input.email {
            client.email = Set(email);
        }
        if let Some(phone) = input.phone {
            client.phone = Set(phone);
        }
        if let Some(address) = input.address {
            client.address = Set(address);
        }
        if let Some(is_active) = input.is_active {
            client.is_active = Set(is_active);
        }
        client.updated_at = Set(chrono::Utc::now().into());

        client.update(&self.db).await
    }

    /// Deactivates a client (soft delete).
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), DbErr> {
        let client = clients::ActiveModel {
            id: Set(id),
            is_active: Set(false),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        client.update(&self.db).await?;
        Ok(())
    }
}
