pub(super) const CONFIG_CANDIDATES: [&str; 2] = [
    "predictor.toml",
    "/etc/startup-predictor/predictor.toml",
];

pub(super) const DEFAULT_MODEL_PATH: &str = "startup_success_model.json";
