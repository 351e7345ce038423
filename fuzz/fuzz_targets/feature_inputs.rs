#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use predictor::{
    FeatureBuilder, FeatureSchema, MarketSize, MismatchPolicy, StartupProfile, YesNo,
};

static SCHEMA: Lazy<FeatureSchema> = Lazy::new(|| {
    let mut names: Vec<String> = FeatureSchema::legacy().names().to_vec();
    for extra in [
        "team_size",
        "usp_defined",
        "is_software",
        "market_size_Medium",
        "market_size_Small",
        "startup_stage_Seed",
    ] {
        names.push(extra.to_string());
    }
    FeatureSchema::new(names).unwrap_or_else(|_| FeatureSchema::legacy())
});

fn bounded_text(data: &[u8], offset: usize, len: usize) -> String {
    let start = offset.min(data.len());
    let end = (start + len).min(data.len());
    String::from_utf8_lossy(&data[start..end]).to_string()
}

fn float_at(data: &[u8], offset: usize) -> f64 {
    let mut bytes = [0u8; 8];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = data.get(offset + i).copied().unwrap_or_default();
    }
    f64::from_le_bytes(bytes)
}

fn market_size(tag: u8) -> Option<MarketSize> {
    match tag % 4 {
        0 => None,
        1 => Some(MarketSize::Large),
        2 => Some(MarketSize::Medium),
        _ => Some(MarketSize::Small),
    }
}

fn policy(tag: u8) -> MismatchPolicy {
    match tag % 3 {
        0 => MismatchPolicy::Ignore,
        1 => MismatchPolicy::Warn,
        _ => MismatchPolicy::Reject,
    }
}

fuzz_target!(|data: &[u8]| {
    let byte = |i: usize| data.get(i).copied().unwrap_or_default();

    let profile = StartupProfile {
        relationships: i64::from(byte(0) as i8),
        funding_total_usd: float_at(data, 1),
        age_first_funding_year: float_at(data, 9),
        age_last_funding_year: float_at(data, 17),
        age_first_milestone_year: float_at(data, 25),
        age_last_milestone_year: float_at(data, 33),
        avg_participants: float_at(data, 41),
        milestones: i64::from(byte(49) as i8),
        funding_rounds: i64::from(byte(50)),
        is_top500: YesNo::from(byte(51) & 1 == 1),
        team_size: (byte(52) & 1 == 1).then(|| i64::from(byte(53) as i8)),
        usp_defined: (byte(54) & 1 == 1).then(|| YesNo::from(byte(54) & 2 == 2)),
        industry_type: Some(bounded_text(data, 60, 16)),
        market_size: market_size(byte(55)),
        startup_stage: Some(bounded_text(data, 76, 16)),
    };

    let builder = FeatureBuilder::new(&SCHEMA, policy(byte(56)));
    if let Ok(vector) = builder.build(&profile) {
        assert_eq!(vector.len(), SCHEMA.len());
        for value in vector.values() {
            assert!(!value.is_nan());
        }
    }
});
