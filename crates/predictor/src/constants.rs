/// Width of the fixed-order input used by the first model generation.
pub const LEGACY_FEATURE_COUNT: usize = 10;

/// Column order of the first model generation, which was fed a positional
/// array rather than a named frame.
pub const LEGACY_FEATURE_NAMES: [&str; LEGACY_FEATURE_COUNT] = [
    "relationships",
    "funding_total_usd",
    "age_last_milestone_year",
    "age_last_funding_year",
    "age_first_funding_year",
    "age_first_milestone_year",
    "avg_participants",
    "milestones",
    "funding_rounds",
    "is_top500",
];

/// `industry_type = "software"` targets column `is_software`.
pub const INDUSTRY_COLUMN_PREFIX: &str = "is_";

/// `startup_stage = "Seed"` targets column `startup_stage_Seed`.
pub const STARTUP_STAGE_COLUMN_PREFIX: &str = "startup_stage_";

// "Large" is the reference category and has no column.
pub const MARKET_SIZE_MEDIUM_COLUMN: &str = "market_size_Medium";
pub const MARKET_SIZE_SMALL_COLUMN: &str = "market_size_Small";

/// Positive-class probability strictly above this is labelled a success.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.5;
