use std::path::PathBuf;

use predictor::{
    FeatureSchema, MismatchPolicy, PredictionService, ServiceSettings, StartupError,
    StartupProfile, YesNo,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_service() -> PredictionService {
    let settings = ServiceSettings {
        schema_path: Some(fixture("feature_schema.json")),
        ..ServiceSettings::new(fixture("startup_success_model.json"))
    };
    PredictionService::load(&settings).expect("fixture model loads")
}

fn scenario_profile() -> StartupProfile {
    StartupProfile {
        relationships: 5,
        funding_total_usd: 1_000_000.0,
        age_first_funding_year: 2.0,
        age_last_funding_year: 2.0,
        age_first_milestone_year: 2.0,
        age_last_milestone_year: 2.0,
        avg_participants: 3.0,
        milestones: 2,
        funding_rounds: 2,
        is_top500: YesNo::Yes,
        ..StartupProfile::default()
    }
}

#[test]
fn pinned_model_reproduces_recorded_prediction() {
    let service = fixture_service();
    let result = service.predict(&scenario_profile()).expect("prediction");

    assert!((0.0..=1.0).contains(&result.probability));
    assert!(result.label);
    assert_eq!(result.class_index(), 1);
    assert!(
        (result.probability - 0.766_666_666_666_666_7).abs() < 1e-9,
        "probability drifted: {}",
        result.probability
    );
}

#[test]
fn repeated_predictions_are_identical() {
    let service = fixture_service();
    let first = service.predict(&scenario_profile()).expect("first");
    let second = service.predict(&scenario_profile()).expect("second");
    assert_eq!(first, second);
}

#[test]
fn submission_json_drives_the_same_prediction() {
    let service = fixture_service();
    let profile: StartupProfile = serde_json::from_str(
        r#"{
            "relationships": 5,
            "funding_total_usd": 1000000.0,
            "age_first_funding_year": 2.0,
            "age_last_funding_year": 2.0,
            "age_first_milestone_year": 2.0,
            "age_last_milestone_year": 2.0,
            "avg_participants": 3.0,
            "milestones": 2,
            "funding_rounds": 2,
            "is_top500": "Yes"
        }"#,
    )
    .expect("submission parses");
    assert_eq!(profile, scenario_profile());
    assert_eq!(
        service.predict(&profile).expect("prediction"),
        service.predict(&scenario_profile()).expect("prediction")
    );
}

#[test]
fn later_variant_fields_against_legacy_model_are_dropped() {
    let service = fixture_service();
    let mut profile = scenario_profile();
    profile.industry_type = Some("software".to_string());
    profile.startup_stage = Some("Seed".to_string());
    profile.usp_defined = Some(YesNo::Yes);

    let result = service.predict(&profile).expect("prediction");
    assert_eq!(result, service.predict(&scenario_profile()).expect("baseline"));
}

#[test]
fn strict_policy_surfaces_schema_gaps() {
    let base = fixture_service();
    let strict = PredictionService::new(
        base.schema().clone(),
        base.model().clone(),
        MismatchPolicy::Reject,
    )
    .expect("strict service");
    let mut profile = scenario_profile();
    profile.industry_type = Some("software".to_string());

    let err = strict.predict(&profile).expect_err("missing is_software column");
    assert!(err.to_string().contains("is_software"), "{err}");
}

#[test]
fn corrupt_model_artifact_fails_startup() {
    let settings = ServiceSettings::new(fixture("corrupt_model.json"));
    let err = PredictionService::load(&settings).expect_err("corrupt model");
    assert!(matches!(err, StartupError::Artifact(_)), "{err}");
}

#[test]
fn absent_model_artifact_fails_startup() {
    let settings = ServiceSettings::new(fixture("no_such_model.json"));
    let err = PredictionService::load(&settings).expect_err("absent model");
    assert!(err.to_string().contains("no_such_model.json"), "{err}");
}

#[test]
fn fixture_schema_matches_legacy_layout() {
    let schema = FeatureSchema::from_file(&fixture("feature_schema.json")).expect("schema");
    assert_eq!(schema, FeatureSchema::legacy());
}
