#![no_main]

use libfuzzer_sys::fuzz_target;
use predictor::{FeatureBuilder, FeatureSchema, MismatchPolicy, StartupProfile};

fuzz_target!(|data: &[u8]| {
    let Ok(profile) = serde_json::from_slice::<StartupProfile>(data) else {
        return;
    };
    let schema = FeatureSchema::legacy();
    if let Ok(vector) = FeatureBuilder::new(&schema, MismatchPolicy::Ignore).build(&profile) {
        assert_eq!(vector.len(), schema.len());
    }
});
