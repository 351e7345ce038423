//! Ordered feature-name list the model was trained on.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::artifact::{read_artifact_text, ArtifactError};
use crate::constants::LEGACY_FEATURE_NAMES;

/// Column names in model input order. Non-empty and duplicate-free; immutable
/// once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

/// Accepted on-disk layouts: a bare array or `{ "features": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    List(Vec<String>),
    Object { features: Vec<String> },
}

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> Result<Self, ArtifactError> {
        if names.is_empty() {
            return Err(ArtifactError::EmptySchema);
        }
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ArtifactError::BlankFeature { index: i });
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(ArtifactError::DuplicateFeature(name.clone()));
            }
        }
        Ok(Self { names, index })
    }

    /// The ten positional columns of the first model generation.
    pub fn legacy() -> Self {
        let names: Vec<String> = LEGACY_FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, index }
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let doc: SchemaDocument = serde_json::from_str(json).map_err(ArtifactError::ParseJson)?;
        let names = match doc {
            SchemaDocument::List(names) | SchemaDocument::Object { features: names } => names,
        };
        Self::new(names)
    }

    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let content = read_artifact_text(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

#[cfg(test)]
mod tests;
