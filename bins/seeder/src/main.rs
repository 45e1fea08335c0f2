//! Database seeder for Atelier development and testing.
//!
//! Seeds a demo login, a client, and a project with one task so the
//! API is explorable right after `migrator up`.
//!
//! Usage: cargo run --bin seeder

use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use atelier_core::auth::hash_password;
use atelier_db::entities::{
    clients, project_tasks, projects,
    sea_orm_active_enums::{ProjectStatus, ProjectType, TaskPriority, TaskStatus, TaskType},
    users,
};

/// Demo user ID (consistent for all seeds)
const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo client ID (consistent for all seeds)
const DEMO_CLIENT_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Demo project ID (consistent for all seeds)
const DEMO_PROJECT_ID: &str = "00000000-0000-0000-0000-000000000003";

/// Demo login: joao.silva@atelier.dev / MinhaSenh@123
const DEMO_EMAIL: &str = "joao.silva@atelier.dev";
const DEMO_PASSWORD: &str = "MinhaSenh@123";
const DEMO_CPF: &str = "52998224725";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = atelier_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo user...");
    seed_demo_user(&db).await;

    println!("Seeding demo client...");
    seed_demo_client(&db).await;

    println!("Seeding demo project...");
    seed_demo_project(&db).await;

    println!("Seeding complete!");
    println!("Login with {DEMO_EMAIL} / {DEMO_PASSWORD}");
}

fn demo_user_id() -> Uuid {
    Uuid::parse_str(DEMO_USER_ID).unwrap()
}

fn demo_client_id() -> Uuid {
    Uuid::parse_str(DEMO_CLIENT_ID).unwrap()
}

fn demo_project_id() -> Uuid {
    Uuid::parse_str(DEMO_PROJECT_ID).unwrap()
}

async fn seed_demo_user(db: &DatabaseConnection) {
    let existing = users::Entity::find_by_id(demo_user_id())
        .one(db)
        .await
        .expect("Failed to query users");
    if existing.is_some() {
        println!("  demo user already present, skipping");
        return;
    }

    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let now = chrono::Utc::now().into();

    users::ActiveModel {
        id: Set(demo_user_id()),
        first_name: Set("João".to_string()),
        last_name: Set("Silva".to_string()),
        email: Set(DEMO_EMAIL.to_string()),
        cpf: Set(DEMO_CPF.to_string()),
        password_hash: Set(password_hash),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert demo user");
}

async fn seed_demo_client(db: &DatabaseConnection) {
    let existing = clients::Entity::find_by_id(demo_client_id())
        .one(db)
        .await
        .expect("Failed to query clients");
    if existing.is_some() {
        println!("  demo client already present, skipping");
        return;
    }

    let now = chrono::Utc::now().into();

    clients::ActiveModel {
        id: Set(demo_client_id()),
        name: Set("Construtora Horizonte".to_string()),
        email: Set(Some("contato@horizonte.example".to_string())),
        phone: Set("+55 11 91234-5678".to_string()),
        cpf: Set(None),
        cnpj: Set(Some("12345678000190".to_string())),
        address: Set(Some("Av. Paulista, 1000 - São Paulo/SP".to_string())),
        is_active: Set(true),
        created_by: Set(demo_user_id()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert demo client");
}

async fn seed_demo_project(db: &DatabaseConnection) {
    let existing = projects::Entity::find_by_id(demo_project_id())
        .one(db)
        .await
        .expect("Failed to query projects");
    if existing.is_some() {
        println!("  demo project already present, skipping");
        return;
    }

    let now = chrono::Utc::now().into();

    projects::ActiveModel {
        id: Set(demo_project_id()),
        title: Set("Residência Jardim Europa".to_string()),
        description: Set(Some("Residência unifamiliar de alto padrão".to_string())),
        r#type: Set(ProjectType::Residential),
        status: Set(ProjectStatus::Planning),
        address: Set(Some("Rua das Magnólias, 42 - São Paulo/SP".to_string())),
        total_area: Set(Some(Decimal::from_str("420.50").unwrap())),
        estimated_value: Set(Some(Decimal::from_str("1850000.00").unwrap())),
        start_date: Set(None),
        end_date: Set(None),
        client_id: Set(demo_client_id()),
        created_by: Set(demo_user_id()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert demo project");

    project_tasks::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Levantamento topográfico".to_string()),
        description: Set(None),
        r#type: Set(TaskType::Inspection),
        status: Set(TaskStatus::Todo),
        priority: Set(TaskPriority::High),
        due_date: Set(None),
        completed_at: Set(None),
        progress: Set(None),
        notes: Set(None),
        project_id: Set(demo_project_id()),
        assignee_id: Set(None),
        created_by: Set(demo_user_id()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert demo task");
}
