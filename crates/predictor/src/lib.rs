mod artifact;
pub mod builder;
mod constants;
mod engine;
mod math;
pub mod model;
pub mod schema;
mod service;
mod types;

pub use artifact::ArtifactError;
pub use builder::{BuildError, FeatureBuilder, FeatureVector, MismatchPolicy};
pub use constants::{
    DEFAULT_DECISION_THRESHOLD, INDUSTRY_COLUMN_PREFIX, LEGACY_FEATURE_COUNT,
    LEGACY_FEATURE_NAMES, MARKET_SIZE_MEDIUM_COLUMN, MARKET_SIZE_SMALL_COLUMN,
    STARTUP_STAGE_COLUMN_PREFIX,
};
pub use engine::{InferenceEngine, InferenceError};
pub use model::{
    Classifier, DecisionTree, Estimator, LogisticModel, ModelArtifact, ModelError, RandomForest,
};
pub use schema::FeatureSchema;
pub use service::{PredictError, PredictionService, ServiceSettings, StartupError};
pub use types::{MarketSize, PredictionResult, StartupProfile, YesNo};
