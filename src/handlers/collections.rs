use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, Result};
use crate::repositories::CollectionRepository;
use crate::schemas::{Validate, WorkoutCollectionCreate, WorkoutCollectionOut, WorkoutOut};

#[derive(Clone)]
pub struct CollectionsState {
    pub collection_repo: CollectionRepository,
}

fn collection_not_found() -> AppError {
    AppError::NotFound("Collection not found".to_string())
}

pub async fn create(
    State(state): State<CollectionsState>,
    WithRejection(Json(input), _): WithRejection<Json<WorkoutCollectionCreate>, AppError>,
) -> Result<(StatusCode, Json<WorkoutCollectionOut>)> {
    input.validate()?;

    let collection = state.collection_repo.create(&input).await?;

    Ok((StatusCode::CREATED, Json(collection.into())))
}

pub async fn list(State(state): State<CollectionsState>) -> Result<Json<Vec<WorkoutCollectionOut>>> {
    let collections = state.collection_repo.find_all().await?;

    Ok(Json(collections.into_iter().map(Into::into).collect()))
}

pub async fn show(
    State(state): State<CollectionsState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<WorkoutCollectionOut>> {
    let collection = state
        .collection_repo
        .find_by_id(id)
        .await?
        .ok_or_else(collection_not_found)?;

    Ok(Json(collection.into()))
}

pub async fn workouts(
    State(state): State<CollectionsState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<Vec<WorkoutOut>>> {
    if state.collection_repo.find_by_id(id).await?.is_none() {
        return Err(collection_not_found());
    }

    let workouts = state.collection_repo.find_workouts(id).await?;

    Ok(Json(workouts.into_iter().map(Into::into).collect()))
}
