use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::Value;

use crate::ai::PlanGenerator;
use crate::error::{AppError, Result};
use crate::schemas::require_text;

#[derive(Clone)]
pub struct AiState {
    pub generator: Arc<dyn PlanGenerator>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePlanParams {
    pub prompt: String,
}

/// Forwards the prompt and returns whatever the provider answered with.
pub async fn generate_plan(
    State(state): State<AiState>,
    WithRejection(Query(params), _): WithRejection<Query<GeneratePlanParams>, AppError>,
) -> Result<Json<Value>> {
    require_text("prompt", &params.prompt)?;

    let payload = state
        .generator
        .generate_plan(&params.prompt)
        .await
        .map_err(|e| AppError::Collaborator(e.0))?;

    Ok(Json(payload))
}
