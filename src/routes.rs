use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{ai, catalog, collections, health, users};

pub fn create_router(
    users_state: users::UsersState,
    collections_state: collections::CollectionsState,
    catalog_state: catalog::CatalogState,
    ai_state: ai::AiState,
) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Accounts
        .route("/users", post(users::register))
        .route("/auth/login", post(users::login))
        .with_state(users_state)
        // Workout catalog
        .route(
            "/collections",
            get(collections::list).post(collections::create),
        )
        .route("/collections/{id}", get(collections::show))
        .route("/collections/{id}/workouts", get(collections::workouts))
        .with_state(collections_state)
        // Navigation
        .route("/workouts/{id}", get(catalog::show_workout))
        .route("/workouts/{id}/plans", get(catalog::workout_plans))
        .route("/plans/{id}", get(catalog::show_plan))
        .route("/plans/{id}/sessions", get(catalog::plan_sessions))
        .route("/users/{id}/sessions", get(catalog::user_sessions))
        .with_state(catalog_state)
        // Plan generation
        .route("/ai/generate-plan", post(ai::generate_plan))
        .with_state(ai_state)
}
