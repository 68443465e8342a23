//! Workout plan generation through an external text model.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure reported by a plan generator. The text is the provider's own
/// description and is forwarded to the client as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct GenerationError(pub String);

#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Returns the provider's success payload untouched.
    async fn generate_plan(&self, prompt: &str) -> Result<Value, GenerationError>;
}
