//! Deterministic word-frequency histograms for remote text documents.
//!
//! `word-histogram` fetches a text, splits it into word tokens, counts them,
//! and ranks the top entries by count. The ranked list can be rendered as a
//! terminal bar chart, exported as `histogram_data.csv`, or serialized as a
//! JSON report. Ranking is deterministic: identical text always produces an
//! identical list, ties ordered by token.

pub mod config;
pub mod controller;
pub mod document;
pub mod export;
pub mod frequency;
pub mod logging;
pub mod presenter;
pub mod run;
pub mod source;
pub mod types;
