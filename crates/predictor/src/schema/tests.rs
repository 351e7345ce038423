use super::*;

#[test]
fn legacy_schema_keeps_positional_order() {
    let schema = FeatureSchema::legacy();
    assert_eq!(schema.len(), 10);
    assert_eq!(schema.index_of("relationships"), Some(0));
    assert_eq!(schema.index_of("age_last_milestone_year"), Some(2));
    assert_eq!(schema.index_of("age_first_milestone_year"), Some(5));
    assert_eq!(schema.index_of("is_top500"), Some(9));
    assert!(!schema.contains("team_size"));
}

#[test]
fn bare_array_and_object_documents_are_equivalent() {
    let list = FeatureSchema::from_json(r#"["relationships", "is_software"]"#).unwrap();
    let object =
        FeatureSchema::from_json(r#"{"features": ["relationships", "is_software"]}"#).unwrap();
    assert_eq!(list, object);
    assert_eq!(list.names(), &["relationships", "is_software"]);
}

#[test]
fn empty_schema_is_rejected() {
    let err = FeatureSchema::from_json("[]").unwrap_err();
    assert!(matches!(err, ArtifactError::EmptySchema));
}

#[test]
fn duplicate_column_is_rejected() {
    let err = FeatureSchema::from_json(r#"["milestones", "milestones"]"#).unwrap_err();
    match err {
        ArtifactError::DuplicateFeature(name) => assert_eq!(name, "milestones"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_column_is_rejected() {
    let err = FeatureSchema::from_json(r#"["milestones", "  "]"#).unwrap_err();
    assert!(matches!(err, ArtifactError::BlankFeature { index: 1 }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = FeatureSchema::from_json("{not json").unwrap_err();
    assert!(matches!(err, ArtifactError::ParseJson(_)));
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("startup-predictor-no-such-schema.json");
    let err = FeatureSchema::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("startup-predictor-no-such-schema.json"));
}
