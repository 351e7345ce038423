//! Pre-trained binary classifier, loaded from a JSON artifact.
//!
//! The model is produced by an offline training pipeline and shipped as a
//! file next to the binary. This crate performs inference only.
//!
//! ```json
//! {
//!   "model_id": "startup-success-rf",
//!   "model_version": "2024.1",
//!   "type": "random_forest",
//!   "n_features": 10,
//!   "trees": [ { "children_left": [...], "children_right": [...],
//!                "feature": [...], "threshold": [...], "value": [[n0, n1], ...] } ]
//! }
//! ```
//!
//! `"type": "logistic"` takes `weights` and `bias` instead.

mod forest;
mod logistic;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::artifact::{read_artifact_text, ArtifactError};
use crate::constants::DEFAULT_DECISION_THRESHOLD;
use crate::engine::InferenceError;

pub use forest::{DecisionTree, RandomForest};
pub use logistic::LogisticModel;

/// Estimation interface shared by every supported model family.
pub trait Classifier {
    /// Input width the model was trained on.
    fn n_features(&self) -> usize;

    /// Probabilities of classes `[0, 1]`. `x.len()` equals `n_features()`.
    fn class_probabilities(&self, x: &[f64]) -> [f64; 2];

    fn validate(&self) -> Result<(), ModelError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    Logistic(LogisticModel),
    RandomForest(RandomForest),
}

impl Estimator {
    /// Values accepted in the artifact's `"type"` field.
    pub const KINDS: [&'static str; 2] = ["logistic", "random_forest"];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Logistic(_) => Self::KINDS[0],
            Self::RandomForest(_) => Self::KINDS[1],
        }
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            Self::Logistic(m) => m as &dyn Classifier,
            Self::RandomForest(m) => m as &dyn Classifier,
        }
    }
}

/// Serialized model plus the metadata the training pipeline attaches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_id: String,
    pub model_version: String,
    /// Free-form description, e.g. "Random Forest Classifier".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub training_samples: usize,
    /// Column names in training order. Empty for models trained on a bare
    /// positional array.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_names: Vec<String>,
    /// Class-1 probability strictly above this yields label `true`.
    #[serde(default = "default_decision_threshold")]
    pub decision_threshold: f64,
    #[serde(flatten)]
    pub estimator: Estimator,
}

fn default_decision_threshold() -> f64 {
    DEFAULT_DECISION_THRESHOLD
}

impl ModelArtifact {
    /// Parse without structural validation; see [`ModelArtifact::validate`].
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(ArtifactError::ParseJson)?;
        match value.get("type") {
            None => return Err(ModelError::MissingType.into()),
            Some(serde_json::Value::String(kind)) if Estimator::KINDS.contains(&kind.as_str()) => {}
            Some(serde_json::Value::String(kind)) => {
                return Err(ModelError::UnsupportedType(kind.clone()).into())
            }
            Some(other) => return Err(ModelError::UnsupportedType(other.to_string()).into()),
        }
        serde_json::from_value(value).map_err(ArtifactError::ParseJson)
    }

    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let content = read_artifact_text(path)?;
        Self::from_json(&content)
    }

    /// Check that the model can be evaluated on every input of its width.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.estimator.inner().validate()?;
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(ModelError::InvalidThreshold(self.decision_threshold));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.n_features() {
            return Err(ModelError::FeatureNamesMismatch {
                expected: self.n_features(),
                got: self.feature_names.len(),
            });
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.estimator.inner().n_features()
    }

    /// Per-class probabilities for one row.
    pub fn predict_proba(&self, x: &[f64]) -> Result<[f64; 2], InferenceError> {
        let expected = self.n_features();
        if x.len() != expected {
            return Err(InferenceError::ShapeMismatch {
                expected,
                got: x.len(),
            });
        }
        Ok(self.estimator.inner().class_probabilities(x))
    }

    /// Discrete class for one row; ties go to class 0.
    pub fn predict(&self, x: &[f64]) -> Result<bool, InferenceError> {
        let proba = self.predict_proba(x)?;
        Ok(proba[1] > self.decision_threshold)
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm
            .as_deref()
            .unwrap_or_else(|| self.estimator.kind())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    MissingType,
    UnsupportedType(String),
    EmptyModel,
    NonFiniteWeight { index: usize, value: f64 },
    NonFiniteBias(f64),
    InvalidThreshold(f64),
    FeatureNamesMismatch { expected: usize, got: usize },
    MalformedTree { tree: usize, node: usize, reason: &'static str },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingType => write!(f, "model artifact has no \"type\" field"),
            Self::UnsupportedType(kind) => write!(
                f,
                "unsupported model type {kind:?}, expected one of {:?}",
                Estimator::KINDS
            ),
            Self::EmptyModel => write!(f, "model has no parameters"),
            Self::NonFiniteWeight { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            Self::NonFiniteBias(b) => write!(f, "non-finite bias: {b}"),
            Self::InvalidThreshold(t) => write!(f, "decision threshold {t} not in [0, 1]"),
            Self::FeatureNamesMismatch { expected, got } => write!(
                f,
                "model lists {got} feature names but takes {expected} inputs"
            ),
            Self::MalformedTree { tree, node, reason } => {
                write!(f, "tree {tree} node {node}: {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
