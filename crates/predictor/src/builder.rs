//! Maps a form submission onto the schema-ordered feature vector.
//!
//! Every column starts at zero. Numeric and yes/no fields are copied into the
//! column of the same name; categorical fields are expanded into indicator
//! columns:
//!
//! ```text
//! industry_type = v  ─→ is_<v>              = 1
//! market_size   = Medium / Small ─→ market_size_<v> = 1   (Large: nothing)
//! startup_stage = v  ─→ startup_stage_<v>   = 1
//! ```
//!
//! A target column missing from the schema is handled per [`MismatchPolicy`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{INDUSTRY_COLUMN_PREFIX, STARTUP_STAGE_COLUMN_PREFIX};
use crate::schema::FeatureSchema;
use crate::types::StartupProfile;

/// What to do when an input targets a column the schema does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Drop the selection without a trace.
    Ignore,
    /// Drop the selection, log it and record it on the vector.
    #[default]
    Warn,
    /// Fail the submission.
    Reject,
}

impl MismatchPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ignore" | "silent" => Some(Self::Ignore),
            "warn" | "warning" => Some(Self::Warn),
            "reject" | "strict" | "error" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Reject => "reject",
        }
    }
}

/// Numeric row aligned to a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
    unmatched: Vec<String>,
}

impl FeatureVector {
    /// Wrap an already ordered row, as the positional legacy form produced.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            unmatched: Vec::new(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Target columns that were requested but absent from the schema.
    /// Only populated under [`MismatchPolicy::Warn`].
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn value_of(&self, schema: &FeatureSchema, column: &str) -> Option<f64> {
        schema
            .index_of(column)
            .and_then(|i| self.values.get(i).copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    BelowMinimum { field: &'static str, value: f64 },
    UnknownColumn(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum { field, value } => {
                write!(f, "{field} must be at least 0, got {value}")
            }
            Self::UnknownColumn(column) => {
                write!(f, "model has no feature column {column:?}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug, Clone, Copy)]
pub struct FeatureBuilder<'a> {
    schema: &'a FeatureSchema,
    policy: MismatchPolicy,
}

impl<'a> FeatureBuilder<'a> {
    pub fn new(schema: &'a FeatureSchema, policy: MismatchPolicy) -> Self {
        Self { schema, policy }
    }

    pub fn build(&self, profile: &StartupProfile) -> Result<FeatureVector, BuildError> {
        check_minimums(profile)?;

        let mut row = RowWriter {
            schema: self.schema,
            policy: self.policy,
            values: vec![0.0; self.schema.len()],
            unmatched: Vec::new(),
        };

        for (column, value) in profile.direct_columns() {
            row.set(column, value)?;
        }

        if let Some(industry) = category(profile.industry_type.as_deref()) {
            row.set(&format!("{INDUSTRY_COLUMN_PREFIX}{industry}"), 1.0)?;
        }
        if let Some(column) = profile.market_size.and_then(|m| m.indicator_column()) {
            row.set(column, 1.0)?;
        }
        if let Some(stage) = category(profile.startup_stage.as_deref()) {
            row.set(&format!("{STARTUP_STAGE_COLUMN_PREFIX}{stage}"), 1.0)?;
        }

        Ok(FeatureVector {
            values: row.values,
            unmatched: row.unmatched,
        })
    }
}

struct RowWriter<'a> {
    schema: &'a FeatureSchema,
    policy: MismatchPolicy,
    values: Vec<f64>,
    unmatched: Vec<String>,
}

impl RowWriter<'_> {
    fn set(&mut self, column: &str, value: f64) -> Result<(), BuildError> {
        if let Some(i) = self.schema.index_of(column) {
            self.values[i] = value;
            return Ok(());
        }
        match self.policy {
            MismatchPolicy::Ignore => Ok(()),
            MismatchPolicy::Warn => {
                warn!(column, "input targets a column missing from the feature schema, dropped");
                self.unmatched.push(column.to_string());
                Ok(())
            }
            MismatchPolicy::Reject => Err(BuildError::UnknownColumn(column.to_string())),
        }
    }
}

fn check_minimums(profile: &StartupProfile) -> Result<(), BuildError> {
    for (field, value) in profile.bounded_fields() {
        if value.is_nan() || value < 0.0 {
            return Err(BuildError::BelowMinimum { field, value });
        }
    }
    Ok(())
}

fn category(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
