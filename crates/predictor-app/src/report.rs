use std::fmt;

use predictor::{ModelArtifact, PredictionResult};

const SUCCESS_HEADLINE: &str = "High Probability of Startup Success";
const FAILURE_HEADLINE: &str = "High Risk of Startup Failure";

pub fn headline(result: &PredictionResult) -> &'static str {
    if result.label {
        SUCCESS_HEADLINE
    } else {
        FAILURE_HEADLINE
    }
}

pub fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Whole-percent fill for a progress bar, capped at 100.
pub fn progress(probability: f64) -> u8 {
    (probability * 100.0).floor().clamp(0.0, 100.0) as u8
}

pub fn render(result: &PredictionResult) -> String {
    let filled = usize::from(progress(result.probability)) / 5;
    format!(
        "{}\nPredicted Success Probability: {}\n[{}{}] {}%",
        headline(result),
        percent(result.probability),
        "#".repeat(filled),
        "-".repeat(20 - filled),
        progress(result.probability),
    )
}

pub fn render_error(err: &impl fmt::Display) -> String {
    format!("Prediction unavailable: {err}")
}

pub fn model_summary(model: &ModelArtifact) -> String {
    let mut line = format!(
        "Model {} v{} ({}, {} features",
        model.model_id,
        model.model_version,
        model.algorithm_name(),
        model.n_features()
    );
    if model.training_samples > 0 {
        line.push_str(&format!(", trained on {} startups", model.training_samples));
    }
    line.push(')');
    line
}
