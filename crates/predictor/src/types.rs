use serde::{Deserialize, Serialize};

use crate::constants::{MARKET_SIZE_MEDIUM_COLUMN, MARKET_SIZE_SMALL_COLUMN};

/// A two-way form selection. Only these two values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    No,
    Yes,
}

impl YesNo {
    pub fn indicator(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketSize {
    Large,
    Medium,
    Small,
}

impl MarketSize {
    /// Indicator column set by this selection. `Large` is the reference
    /// category and leaves every market-size column at zero.
    pub fn indicator_column(self) -> Option<&'static str> {
        match self {
            Self::Large => None,
            Self::Medium => Some(MARKET_SIZE_MEDIUM_COLUMN),
            Self::Small => Some(MARKET_SIZE_SMALL_COLUMN),
        }
    }
}

/// One form submission. Missing fields take the form's minimum (zero / "No").
///
/// Counts are signed so a negative entry reaches the minimum check and is
/// reported like any other out-of-range field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupProfile {
    pub relationships: i64,
    pub funding_total_usd: f64,
    pub age_first_funding_year: f64,
    pub age_last_funding_year: f64,
    pub age_first_milestone_year: f64,
    pub age_last_milestone_year: f64,
    pub avg_participants: f64,
    pub milestones: i64,
    pub funding_rounds: i64,
    pub is_top500: YesNo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usp_defined: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_size: Option<MarketSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_stage: Option<String>,
}

impl StartupProfile {
    /// Fields copied verbatim into the column of the same name.
    pub(crate) fn direct_columns(&self) -> Vec<(&'static str, f64)> {
        let mut columns = vec![
            ("relationships", self.relationships as f64),
            ("funding_total_usd", self.funding_total_usd),
            ("age_first_funding_year", self.age_first_funding_year),
            ("age_last_funding_year", self.age_last_funding_year),
            ("age_first_milestone_year", self.age_first_milestone_year),
            ("age_last_milestone_year", self.age_last_milestone_year),
            ("avg_participants", self.avg_participants),
            ("milestones", self.milestones as f64),
            ("funding_rounds", self.funding_rounds as f64),
            ("is_top500", self.is_top500.indicator()),
        ];
        if let Some(team_size) = self.team_size {
            columns.push(("team_size", team_size as f64));
        }
        if let Some(usp) = self.usp_defined {
            columns.push(("usp_defined", usp.indicator()));
        }
        columns
    }

    /// Fields subject to the form's `min_value = 0` constraint.
    pub(crate) fn bounded_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = vec![
            ("relationships", self.relationships as f64),
            ("funding_total_usd", self.funding_total_usd),
            ("age_first_funding_year", self.age_first_funding_year),
            ("age_last_funding_year", self.age_last_funding_year),
            ("age_first_milestone_year", self.age_first_milestone_year),
            ("age_last_milestone_year", self.age_last_milestone_year),
            ("avg_participants", self.avg_participants),
            ("milestones", self.milestones as f64),
            ("funding_rounds", self.funding_rounds as f64),
        ];
        if let Some(team_size) = self.team_size {
            fields.push(("team_size", team_size as f64));
        }
        fields
    }
}

/// Outcome of one prediction. Derived per submission, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// `true` when the model predicts success (class 1).
    pub label: bool,
    /// Probability of class 1, in `[0, 1]`.
    pub probability: f64,
}

impl PredictionResult {
    pub fn class_index(&self) -> u8 {
        u8::from(self.label)
    }
}
