use std::fmt;

use tracing::debug;

use crate::builder::FeatureVector;
use crate::model::{ModelArtifact, ModelError};
use crate::types::PredictionResult;

/// Runs a validated model over feature vectors. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    model: ModelArtifact,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    ShapeMismatch { expected: usize, got: usize },
    InvalidProbability(f64),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "model expects {expected} features, got {got}")
            }
            Self::InvalidProbability(p) => write!(f, "model produced probability {p}"),
        }
    }
}

impl std::error::Error for InferenceError {}

impl InferenceEngine {
    /// Refuses models that fail structural validation.
    pub fn new(model: ModelArtifact) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self { model })
    }

    pub fn model(&self) -> &ModelArtifact {
        &self.model
    }

    pub fn model_id(&self) -> &str {
        &self.model.model_id
    }

    pub fn model_version(&self) -> &str {
        &self.model.model_version
    }

    /// Classify one row and estimate its success probability.
    pub fn infer(&self, features: &FeatureVector) -> Result<PredictionResult, InferenceError> {
        let x = features.values();
        let label = self.model.predict(x)?;
        let probability = self.model.predict_proba(x)?[1];
        if !(0.0..=1.0).contains(&probability) {
            return Err(InferenceError::InvalidProbability(probability));
        }

        debug!(
            model_id = %self.model.model_id,
            label,
            probability,
            "inference complete"
        );
        Ok(PredictionResult { label, probability })
    }
}
