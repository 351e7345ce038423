use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError};
use crate::math::{dot, sigmoid};

/// Linear-logit model: `p(success) = σ(w · x + b)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Classifier for LogisticModel {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn class_probabilities(&self, x: &[f64]) -> [f64; 2] {
        let p = sigmoid(dot(&self.weights, x) + self.bias);
        [1.0 - p, p]
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.weights.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        Ok(())
    }
}
