use std::path::Path;

use anyhow::{bail, Context, Result};
use predictor::MismatchPolicy;
use serde::Deserialize;

use super::types::PredictorConfig;
use super::util::non_empty;

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    artifacts: Option<FileArtifactsConfig>,
    #[serde(default)]
    features: Option<FileFeaturesConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileArtifactsConfig {
    #[serde(default)]
    model_path: Option<String>,
    #[serde(default)]
    schema_path: Option<String>,
    #[serde(default)]
    legacy_layout: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct FileFeaturesConfig {
    #[serde(default)]
    mismatch_policy: Option<String>,
}

impl PredictorConfig {
    pub(super) fn apply_file_config(&mut self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        self.apply_toml(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    pub(super) fn apply_toml(&mut self, raw: &str) -> Result<()> {
        let file_cfg: FileConfig = toml::from_str(raw)?;
        self.apply_file_artifacts(file_cfg.artifacts);
        self.apply_file_features(file_cfg.features)?;
        Ok(())
    }

    fn apply_file_artifacts(&mut self, artifacts: Option<FileArtifactsConfig>) {
        let Some(artifacts) = artifacts else {
            return;
        };

        if let Some(v) = non_empty(artifacts.model_path) {
            self.model_path = v;
        }
        if let Some(v) = non_empty(artifacts.schema_path) {
            self.schema_path = Some(v);
        }
        if let Some(v) = artifacts.legacy_layout {
            self.legacy_layout = v;
        }
    }

    fn apply_file_features(&mut self, features: Option<FileFeaturesConfig>) -> Result<()> {
        let Some(features) = features else {
            return Ok(());
        };

        if let Some(raw) = non_empty(features.mismatch_policy) {
            let Some(policy) = MismatchPolicy::parse(&raw) else {
                bail!("unknown mismatch_policy {raw:?}, expected ignore, warn or reject");
            };
            self.mismatch_policy = policy;
        }
        Ok(())
    }
}
