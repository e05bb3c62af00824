use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::controller::{HistogramController, RefreshError};
use crate::export::ExportError;
use crate::frequency::Tokenizer;
use crate::presenter::render_bar_chart;
use crate::source::TextSource;
use crate::types::histogram::Histogram;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Refresh(#[from] RefreshError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    /// Refresh failures are logged by the controller when they happen.
    pub fn already_logged(&self) -> bool {
        matches!(self, RunError::Refresh(_))
    }
}

/// Everything one fetch-and-compute run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub histogram: Arc<Histogram>,
    pub chart: String,
    pub csv_path: PathBuf,
    pub report_path: Option<PathBuf>,
}

/// Refresh, render, export the CSV and, when configured, the JSON report.
pub async fn run_once<S, T>(
    controller: &HistogramController<S, T>,
    config: &Config,
) -> Result<RunOutcome, RunError>
where
    S: TextSource,
    T: Tokenizer,
{
    let histogram = controller.refresh().await?;
    let chart = render_bar_chart(&histogram.entries, config.chart_width);
    let csv_path = controller.export(&config.export_dir)?;

    let report_path = match &config.report_json {
        Some(path) => {
            let json = serde_json::to_string_pretty(histogram.as_ref())?;
            tokio::fs::write(path, json).await?;
            log::info!("wrote report to {}", path.display());
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunOutcome {
        histogram,
        chart,
        csv_path,
        report_path,
    })
}
