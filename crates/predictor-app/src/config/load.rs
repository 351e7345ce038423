use std::path::Path;

use anyhow::Result;

use super::constants::CONFIG_CANDIDATES;
use super::paths::first_existing;
use super::types::PredictorConfig;

impl PredictorConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_candidates(&CONFIG_CANDIDATES)
    }

    pub(super) fn load_from_candidates<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(path) = first_existing(candidates) {
            cfg.apply_file_config(&path)?;
        }
        Ok(cfg)
    }
}
