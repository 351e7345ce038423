use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::artifact::ArtifactError;
use crate::builder::{BuildError, FeatureBuilder, MismatchPolicy};
use crate::engine::{InferenceEngine, InferenceError};
use crate::model::{ModelArtifact, ModelError};
use crate::schema::FeatureSchema;
use crate::types::{PredictionResult, StartupProfile};

/// Where the artifacts live and how lenient the builder is.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub model_path: PathBuf,
    /// Separate schema artifact. When absent the schema comes from the
    /// model's embedded feature names, or from the legacy layout.
    pub schema_path: Option<PathBuf>,
    pub legacy_layout: bool,
    pub mismatch_policy: MismatchPolicy,
}

impl ServiceSettings {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            schema_path: None,
            legacy_layout: false,
            mismatch_policy: MismatchPolicy::default(),
        }
    }
}

/// Fatal conditions while bringing the service up.
#[derive(Debug)]
pub enum StartupError {
    Artifact(ArtifactError),
    Model(ModelError),
    MissingSchema,
    SchemaWidth { schema: usize, model: usize },
    SchemaOrder { index: usize, schema: String, model: String },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact(e) => write!(f, "{e}"),
            Self::Model(e) => write!(f, "invalid model: {e}"),
            Self::MissingSchema => write!(
                f,
                "no feature schema: model has no feature names and no schema artifact is configured"
            ),
            Self::SchemaWidth { schema, model } => write!(
                f,
                "feature schema has {schema} columns but model takes {model} inputs"
            ),
            Self::SchemaOrder {
                index,
                schema,
                model,
            } => write!(
                f,
                "feature schema column {index} is {schema:?} but model was trained with {model:?}"
            ),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Artifact(e) => Some(e),
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArtifactError> for StartupError {
    fn from(e: ArtifactError) -> Self {
        match e {
            ArtifactError::Model(e) => Self::Model(e),
            e => Self::Artifact(e),
        }
    }
}

impl From<ModelError> for StartupError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// Per-submission failure. The service stays usable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    Build(BuildError),
    Inference(InferenceError),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(e) => write!(f, "invalid input: {e}"),
            Self::Inference(e) => write!(f, "prediction failed: {e}"),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(e) => Some(e),
            Self::Inference(e) => Some(e),
        }
    }
}

impl From<BuildError> for PredictError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

impl From<InferenceError> for PredictError {
    fn from(e: InferenceError) -> Self {
        Self::Inference(e)
    }
}

/// Schema, model and builder policy, assembled once at startup and shared
/// read-only by every prediction.
#[derive(Debug, Clone)]
pub struct PredictionService {
    schema: FeatureSchema,
    engine: InferenceEngine,
    policy: MismatchPolicy,
}

impl PredictionService {
    pub fn new(
        schema: FeatureSchema,
        model: ModelArtifact,
        policy: MismatchPolicy,
    ) -> Result<Self, StartupError> {
        let engine = InferenceEngine::new(model)?;
        check_alignment(&schema, engine.model())?;
        Ok(Self {
            schema,
            engine,
            policy,
        })
    }

    pub fn load(settings: &ServiceSettings) -> Result<Self, StartupError> {
        let model = ModelArtifact::from_file(&settings.model_path)?;
        let schema = resolve_schema(settings, &model)?;
        let service = Self::new(schema, model, settings.mismatch_policy)?;

        info!(
            model_id = %service.engine.model_id(),
            model_version = %service.engine.model_version(),
            algorithm = %service.engine.model().algorithm_name(),
            features = service.schema.len(),
            policy = service.policy.as_str(),
            path = %settings.model_path.display(),
            "prediction model loaded"
        );
        Ok(service)
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model(&self) -> &ModelArtifact {
        self.engine.model()
    }

    pub fn mismatch_policy(&self) -> MismatchPolicy {
        self.policy
    }

    pub fn predict(&self, profile: &StartupProfile) -> Result<PredictionResult, PredictError> {
        let features = FeatureBuilder::new(&self.schema, self.policy).build(profile)?;
        if !features.unmatched().is_empty() {
            debug!(unmatched = ?features.unmatched(), "prediction uses a partial feature vector");
        }
        Ok(self.engine.infer(&features)?)
    }
}

fn resolve_schema(
    settings: &ServiceSettings,
    model: &ModelArtifact,
) -> Result<FeatureSchema, StartupError> {
    if let Some(path) = settings.schema_path.as_deref() {
        return Ok(FeatureSchema::from_file(path)?);
    }
    if settings.legacy_layout {
        return Ok(FeatureSchema::legacy());
    }
    if model.feature_names.is_empty() {
        return Err(StartupError::MissingSchema);
    }
    Ok(FeatureSchema::new(model.feature_names.clone())?)
}

fn check_alignment(schema: &FeatureSchema, model: &ModelArtifact) -> Result<(), StartupError> {
    if schema.len() != model.n_features() {
        return Err(StartupError::SchemaWidth {
            schema: schema.len(),
            model: model.n_features(),
        });
    }
    for (index, (ours, theirs)) in schema.names().iter().zip(&model.feature_names).enumerate() {
        if ours != theirs {
            return Err(StartupError::SchemaOrder {
                index,
                schema: ours.clone(),
                model: theirs.clone(),
            });
        }
    }
    Ok(())
}
