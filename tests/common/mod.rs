#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};

use hybreed::ai::{GenerationError, PlanGenerator};
use hybreed::db::{create_memory_pool, DbPool};
use hybreed::handlers::{ai, catalog, collections, users};
use hybreed::migrations::run_migrations_for_tests;
use hybreed::models::User;
use hybreed::password::hash_password;
use hybreed::repositories::{CatalogRepository, CollectionRepository, UserRepository};
use hybreed::schemas::UserCreate;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

/// Answers every prompt with a fixed reply and remembers what it was asked.
pub struct StubGenerator {
    reply: Result<Value, GenerationError>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn succeeding(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(payload),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(GenerationError(message.to_string())),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PlanGenerator for StubGenerator {
    async fn generate_plan(&self, prompt: &str) -> Result<Value, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

pub fn create_test_app(pool: DbPool) -> Router {
    create_test_app_with_generator(pool, StubGenerator::succeeding(json!({ "plan": "stub" })))
}

pub fn create_test_app_with_generator(pool: DbPool, generator: Arc<dyn PlanGenerator>) -> Router {
    let users_state = users::UsersState {
        user_repo: UserRepository::new(pool.clone()),
    };
    let collections_state = collections::CollectionsState {
        collection_repo: CollectionRepository::new(pool.clone()),
    };
    let catalog_state = catalog::CatalogState {
        catalog_repo: CatalogRepository::new(pool.clone()),
        user_repo: UserRepository::new(pool.clone()),
    };
    let ai_state = ai::AiState { generator };

    hybreed::routes::create_router(users_state, collections_state, catalog_state, ai_state)
}

pub async fn create_test_user(pool: &DbPool, email: &str, password: &str) -> User {
    let input = UserCreate {
        email: email.to_string(),
        full_name: None,
        password: password.to_string(),
    };
    let password_hash = hash_password(password).unwrap();
    UserRepository::new(pool.clone())
        .create(&input, &password_hash)
        .await
        .unwrap()
}

// Workouts, plans and sessions have no create operation, so tests seed them
// directly.
pub fn seed_workout(pool: &DbPool, name: &str, collection_id: Option<i64>) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO workouts (name, collection_id) VALUES (?, ?)",
        rusqlite::params![name, collection_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub fn seed_plan(pool: &DbPool, name: &str, workout_id: i64) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO workout_plans (name, workout_id) VALUES (?, ?)",
        rusqlite::params![name, workout_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub fn seed_session(pool: &DbPool, user_id: i64, plan_id: i64, completed_at: Option<&str>) -> i64 {
    let conn = pool.get().unwrap();
    match completed_at {
        Some(at) => conn.execute(
            "INSERT INTO workout_sessions (user_id, plan_id, completed_at) VALUES (?, ?, ?)",
            rusqlite::params![user_id, plan_id, at],
        ),
        None => conn.execute(
            "INSERT INTO workout_sessions (user_id, plan_id) VALUES (?, ?)",
            rusqlite::params![user_id, plan_id],
        ),
    }
    .unwrap();
    conn.last_insert_rowid()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
