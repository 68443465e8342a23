use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, Result};
use crate::repositories::{CatalogRepository, UserRepository};
use crate::schemas::{WorkoutOut, WorkoutPlanOut, WorkoutSessionOut};

/// Read-only navigation along foreign keys: workout → plans → sessions and
/// user → sessions.
#[derive(Clone)]
pub struct CatalogState {
    pub catalog_repo: CatalogRepository,
    pub user_repo: UserRepository,
}

pub async fn show_workout(
    State(state): State<CatalogState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<WorkoutOut>> {
    let workout = state
        .catalog_repo
        .find_workout(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    Ok(Json(workout.into()))
}

pub async fn workout_plans(
    State(state): State<CatalogState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<Vec<WorkoutPlanOut>>> {
    if state.catalog_repo.find_workout(id).await?.is_none() {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }

    let plans = state.catalog_repo.find_plans(id).await?;

    Ok(Json(plans.into_iter().map(Into::into).collect()))
}

pub async fn show_plan(
    State(state): State<CatalogState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<WorkoutPlanOut>> {
    let plan = state
        .catalog_repo
        .find_plan(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;

    Ok(Json(plan.into()))
}

pub async fn plan_sessions(
    State(state): State<CatalogState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<Vec<WorkoutSessionOut>>> {
    if state.catalog_repo.find_plan(id).await?.is_none() {
        return Err(AppError::NotFound("Plan not found".to_string()));
    }

    let sessions = state.catalog_repo.find_sessions_for_plan(id).await?;

    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

pub async fn user_sessions(
    State(state): State<CatalogState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<Vec<WorkoutSessionOut>>> {
    if state.user_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let sessions = state.user_repo.find_sessions(id).await?;

    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}
