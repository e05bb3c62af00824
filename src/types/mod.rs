pub mod histogram;
pub mod identifiers;

pub use histogram::{
    AnalysisError, Histogram, HistogramSource, HistogramSummary, RankedEntry, RankedList,
    DEFAULT_LIMIT,
};
pub use identifiers::DocumentVersion;
