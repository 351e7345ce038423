mod config;
mod report;
mod session;

use std::io::{self, Write};

use anyhow::{Context, Result};
use predictor::PredictionService;
use tracing::info;

use config::PredictorConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = PredictorConfig::load()?;
    let settings = config.service_settings();
    let service = PredictionService::load(&settings).with_context(|| {
        format!(
            "failed loading prediction model {}",
            settings.model_path.display()
        )
    })?;

    info!(
        config = %config.source_display(),
        policy = config.mismatch_policy.as_str(),
        "startup predictor ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", report::model_summary(service.model()))?;

    let stats = session::run(&service, io::stdin().lock(), &mut out)?;

    info!(
        submissions = stats.handled,
        rejected = stats.rejected,
        "startup predictor stopped"
    );
    Ok(())
}
