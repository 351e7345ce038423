use std::io::{Read, Write};

use anyhow::{Context, Result};
use predictor::{PredictionService, StartupProfile};
use tracing::warn;

use crate::report;

/// Per-stream counters, logged when the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub handled: usize,
    pub rejected: usize,
}

/// Answer every JSON submission on `input`, one report per submission on
/// `out`.
///
/// A submission that does not decode into a profile, or that the service
/// refuses, is reported and skipped. Only a broken JSON stream or a failed
/// write ends the session early.
pub fn run<R: Read, W: Write>(
    service: &PredictionService,
    input: R,
    mut out: W,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    let submissions = serde_json::Deserializer::from_reader(input).into_iter::<serde_json::Value>();

    for submission in submissions {
        let value = submission.context("failed reading submission stream")?;
        stats.handled += 1;

        let profile = match serde_json::from_value::<StartupProfile>(value) {
            Ok(profile) => profile,
            Err(err) => {
                stats.rejected += 1;
                warn!(submission = stats.handled, error = %err, "submission rejected");
                writeln!(out, "{}", report::render_error(&err))?;
                continue;
            }
        };

        match service.predict(&profile) {
            Ok(result) => writeln!(out, "{}", report::render(&result))?,
            Err(err) => {
                stats.rejected += 1;
                warn!(submission = stats.handled, error = %err, "prediction rejected");
                writeln!(out, "{}", report::render_error(&err))?;
            }
        }
    }

    Ok(stats)
}
