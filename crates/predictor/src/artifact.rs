use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::ModelError;

/// Failure to read or decode an externally produced artifact (model or
/// feature schema). Always fatal at startup.
#[derive(Debug)]
pub enum ArtifactError {
    Io { path: PathBuf, source: std::io::Error },
    ParseJson(serde_json::Error),
    EmptySchema,
    BlankFeature { index: usize },
    DuplicateFeature(String),
    /// Well-formed JSON that does not describe a supported model.
    Model(ModelError),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed reading artifact {}: {source}", path.display())
            }
            Self::ParseJson(e) => write!(f, "artifact JSON parse error: {e}"),
            Self::EmptySchema => write!(f, "feature schema has no columns"),
            Self::BlankFeature { index } => {
                write!(f, "feature schema column {index} has an empty name")
            }
            Self::DuplicateFeature(name) => {
                write!(f, "feature schema lists column {name:?} more than once")
            }
            Self::Model(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::ParseJson(e) => Some(e),
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for ArtifactError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

pub(crate) fn read_artifact_text(path: &Path) -> Result<String, ArtifactError> {
    std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}
