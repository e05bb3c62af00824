use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::tempdir;
use word_histogram::controller::{HistogramController, RefreshError};
use word_histogram::document::Document;
use word_histogram::export::ExportError;
use word_histogram::frequency::{FrequencyAnalyzer, WordTokenizer};
use word_histogram::source::{FetchError, FileSource, TextSource};

/// Serves scripted responses in order, the last one repeating.
struct ScriptedSource {
    responses: Vec<Option<&'static str>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(responses: Vec<Option<&'static str>>) -> Self {
        Self {
            responses,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    fn slow(text: &'static str, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new(vec![Some(text)])
        }
    }
}

#[async_trait]
impl TextSource for ScriptedSource {
    fn describe(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Document, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let idx = call.min(self.responses.len() - 1);
        match self.responses[idx] {
            Some(text) => Ok(Document::ingest("scripted", text.as_bytes().to_vec())?),
            None => Err(FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

fn controller(source: ScriptedSource, timeout: Duration) -> HistogramController<ScriptedSource> {
    HistogramController::new(source, FrequencyAnalyzer::default(), timeout)
}

#[tokio::test]
async fn starts_unloaded_without_export() {
    let ctl = HistogramController::with_defaults(ScriptedSource::new(vec![Some("a")]));

    assert!(!ctl.is_loading());
    assert!(ctl.histogram().is_none());
    assert!(!ctl.export_available());

    let dir = tempdir().unwrap();
    assert!(matches!(ctl.export(dir.path()), Err(ExportError::NotLoaded)));
}

#[tokio::test]
async fn refresh_loads_histogram_and_enables_export() {
    let ctl = HistogramController::with_defaults(ScriptedSource::new(vec![Some(
        "the cat sat on the mat",
    )]));

    let histogram = ctl.refresh().await.unwrap();

    assert_eq!(histogram.entries.entries()[0].token, "the");
    assert_eq!(histogram.entries.entries()[0].count, 2);
    assert_eq!(histogram.summary.total_tokens, 6);
    assert!(!ctl.is_loading());
    assert!(ctl.export_available());
    assert_eq!(ctl.histogram().unwrap(), histogram);

    let dir = tempdir().unwrap();
    let path = ctl.export(dir.path()).unwrap();
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "the,2\ncat,1\nmat,1\non,1\nsat,1"
    );
}

#[tokio::test]
async fn failed_first_refresh_stays_unloaded() {
    let ctl = controller(ScriptedSource::new(vec![None]), Duration::from_secs(5));

    let err = ctl.refresh().await.unwrap_err();

    assert!(matches!(err, RefreshError::Fetch(FetchError::Io(_))));
    assert!(ctl.histogram().is_none());
    assert!(!ctl.export_available());
    assert!(!ctl.is_loading(), "loading flag must be released after failure");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_histogram() {
    let ctl = controller(
        ScriptedSource::new(vec![Some("kept kept"), None]),
        Duration::from_secs(5),
    );

    let first = ctl.refresh().await.unwrap();
    assert!(ctl.refresh().await.is_err());

    assert_eq!(ctl.histogram().unwrap(), first);
    assert!(ctl.export_available());
}

#[tokio::test]
async fn refresh_rebuilds_from_scratch() {
    let ctl = controller(
        ScriptedSource::new(vec![Some("one one"), Some("two")]),
        Duration::from_secs(5),
    );

    ctl.refresh().await.unwrap();
    let second = ctl.refresh().await.unwrap();

    assert_eq!(second.entries.len(), 1);
    assert_eq!(second.entries.entries()[0].token, "two");
    assert_eq!(second.summary.total_tokens, 1);
}

#[tokio::test]
async fn overlapping_refresh_is_rejected() {
    let ctl = controller(
        ScriptedSource::slow("slow text", Duration::from_millis(100)),
        Duration::from_secs(5),
    );

    let (first, second) = tokio::join!(ctl.refresh(), ctl.refresh());

    assert!(first.is_ok());
    assert!(matches!(second, Err(RefreshError::AlreadyLoading)));
    assert_eq!(ctl.source().calls.load(Ordering::SeqCst), 1);
    assert!(!ctl.is_loading());
}

#[tokio::test]
async fn hung_fetch_times_out() {
    let ctl = controller(
        ScriptedSource::slow("never", Duration::from_secs(30)),
        Duration::from_millis(50),
    );

    let err = ctl.refresh().await.unwrap_err();

    assert!(matches!(err, RefreshError::TimedOut(d) if d == Duration::from_millis(50)));
    assert!(ctl.histogram().is_none());
    assert!(!ctl.is_loading());
}

#[tokio::test]
async fn file_source_feeds_the_pipeline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tale.txt");
    std::fs::write(&path, "a, a; a: a! a?").unwrap();

    let analyzer = FrequencyAnalyzer::new(WordTokenizer::default(), 20).unwrap();
    let ctl = HistogramController::new(FileSource::new(&path), analyzer, Duration::from_secs(5));

    let histogram = ctl.refresh().await.unwrap();
    let pairs: Vec<(&str, usize)> = histogram
        .entries
        .iter()
        .map(|e| (e.token.as_str(), e.count))
        .collect();
    assert_eq!(pairs, vec![("a", 5), ("", 1)]);
    assert_eq!(histogram.source.source, path.display().to_string());
}
