// Owns the state of the fetch-and-compute flow:
// loading flag, current histogram, export availability.
// One refresh at a time; a failed refresh keeps the previous state.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;

use crate::export::{write_csv, ExportError};
use crate::frequency::{FrequencyAnalyzer, Tokenizer, WordTokenizer};
use crate::source::{FetchError, TextSource};
use crate::types::histogram::Histogram;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("A refresh is already in progress")]
    AlreadyLoading,
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("Fetch timed out after {0:?}")]
    TimedOut(Duration),
}

/// Clears the loading flag when the refresh ends, however it ends.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct HistogramController<S, T = WordTokenizer> {
    source: S,
    analyzer: FrequencyAnalyzer<T>,
    timeout: Duration,
    loading: AtomicBool,
    histogram: Mutex<Option<Arc<Histogram>>>,
}

impl<S> HistogramController<S, WordTokenizer>
where
    S: TextSource,
{
    pub fn with_defaults(source: S) -> Self {
        Self::new(source, FrequencyAnalyzer::default(), DEFAULT_TIMEOUT)
    }
}

impl<S, T> HistogramController<S, T>
where
    S: TextSource,
    T: Tokenizer,
{
    pub fn new(source: S, analyzer: FrequencyAnalyzer<T>, timeout: Duration) -> Self {
        Self {
            source,
            analyzer,
            timeout,
            loading: AtomicBool::new(false),
            histogram: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn histogram(&self) -> Option<Arc<Histogram>> {
        self.histogram.lock().clone()
    }

    /// Export is offered only once data has been computed.
    pub fn export_available(&self) -> bool {
        self.histogram.lock().is_some()
    }

    /// Fetches the text, runs the pipeline and stores the result.
    pub async fn refresh(&self) -> Result<Arc<Histogram>, RefreshError> {
        let _guard = LoadingGuard::acquire(&self.loading).ok_or_else(|| {
            log::warn!("refresh requested while one is in flight, ignoring");
            RefreshError::AlreadyLoading
        })?;

        log::info!("fetching {}", self.source.describe());
        let fetched = tokio::time::timeout(self.timeout, self.source.fetch()).await;

        let document = match fetched {
            Ok(Ok(document)) => document,
            Ok(Err(e)) => {
                log::error!("Error fetching data from {}: {}", self.source.describe(), e);
                return Err(e.into());
            }
            Err(_) => {
                log::error!(
                    "Error fetching data from {}: timed out after {:?}",
                    self.source.describe(),
                    self.timeout
                );
                return Err(RefreshError::TimedOut(self.timeout));
            }
        };

        let histogram = Arc::new(self.analyzer.analyze(&document));
        log::info!(
            "computed {} entries from {} tokens ({})",
            histogram.summary.entries_shown,
            histogram.summary.total_tokens,
            histogram.source.version.as_str()
        );

        *self.histogram.lock() = Some(Arc::clone(&histogram));
        Ok(histogram)
    }

    /// Writes the current histogram as `histogram_data.csv` under `dir`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let histogram = self.histogram().ok_or(ExportError::NotLoaded)?;
        write_csv(&histogram.entries, dir)
    }
}
