use predictor::MismatchPolicy;

use super::constants::DEFAULT_MODEL_PATH;
use super::types::PredictorConfig;

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            schema_path: None,
            legacy_layout: false,
            mismatch_policy: MismatchPolicy::default(),
            source: None,
        }
    }
}
