use std::path::PathBuf;

use predictor::{MismatchPolicy, ServiceSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    pub model_path: String,
    pub schema_path: Option<String>,
    pub legacy_layout: bool,
    pub mismatch_policy: MismatchPolicy,
    /// Config file the values came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
}

impl PredictorConfig {
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            model_path: PathBuf::from(&self.model_path),
            schema_path: self.schema_path.as_ref().map(PathBuf::from),
            legacy_layout: self.legacy_layout,
            mismatch_policy: self.mismatch_policy,
        }
    }

    pub fn source_display(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    }
}
