use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::controller::DEFAULT_TIMEOUT;
use crate::frequency::EmptyTokenPolicy;
use crate::presenter::{DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH};
use crate::source::DEFAULT_SOURCE_URL;
use crate::types::histogram::DEFAULT_LIMIT;

pub const ENV_SOURCE: &str = "WORDFREQ_SOURCE";
pub const ENV_TIMEOUT_SECS: &str = "WORDFREQ_TIMEOUT_SECS";
pub const ENV_TOP_N: &str = "WORDFREQ_TOP_N";
pub const ENV_EXPORT_DIR: &str = "WORDFREQ_EXPORT_DIR";
pub const ENV_DROP_EMPTY: &str = "WORDFREQ_DROP_EMPTY";
pub const ENV_REPORT_JSON: &str = "WORDFREQ_REPORT_JSON";
pub const ENV_CHART_WIDTH: &str = "WORDFREQ_CHART_WIDTH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Where the text is read from, decided by the shape of the configured source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl SourceLocation {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            SourceLocation::Url(raw.to_string())
        } else {
            SourceLocation::File(PathBuf::from(raw))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceLocation,
    pub timeout: Duration,
    pub top_n: usize,
    pub export_dir: PathBuf,
    pub empty_tokens: EmptyTokenPolicy,
    pub report_json: Option<PathBuf>,
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceLocation::Url(DEFAULT_SOURCE_URL.to_string()),
            timeout: DEFAULT_TIMEOUT,
            top_n: DEFAULT_LIMIT,
            export_dir: PathBuf::from("."),
            empty_tokens: EmptyTokenPolicy::Keep,
            report_json: None,
            chart_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv` beforehand to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(source) = get(ENV_SOURCE) {
            config.source = SourceLocation::parse(&source);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_positive(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = get(ENV_TOP_N) {
            config.top_n = parse_positive(ENV_TOP_N, &raw)?;
        }
        if let Some(dir) = get(ENV_EXPORT_DIR) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get(ENV_DROP_EMPTY) {
            config.empty_tokens = if parse_bool(ENV_DROP_EMPTY, &raw)? {
                EmptyTokenPolicy::Drop
            } else {
                EmptyTokenPolicy::Keep
            };
        }
        config.report_json = get(ENV_REPORT_JSON).map(PathBuf::from);
        if let Some(raw) = get(ENV_CHART_WIDTH) {
            let width: usize = parse_positive(ENV_CHART_WIDTH, &raw)?;
            if width > MAX_BAR_WIDTH {
                return Err(ConfigError::Invalid {
                    key: ENV_CHART_WIDTH,
                    value: raw,
                    reason: "exceeds the maximum chart width of 500",
                });
            }
            config.chart_width = width;
        }

        Ok(config)
    }
}

fn parse_positive<N>(key: &'static str, raw: &str) -> Result<N, ConfigError>
where
    N: FromStr + PartialEq + Default,
{
    let value = raw.parse::<N>().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: "expected a non-negative integer",
    })?;
    if value == N::default() {
        return Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected true or false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.source,
            SourceLocation::Url("https://www.terriblytinytales.com/test.txt".to_string())
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.top_n, 20);
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            (ENV_SOURCE, "corpus/words.txt"),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_TOP_N, "5"),
            (ENV_EXPORT_DIR, "out"),
            (ENV_DROP_EMPTY, "true"),
            (ENV_REPORT_JSON, "report.json"),
            (ENV_CHART_WIDTH, "30"),
        ])
        .unwrap();

        assert_eq!(config.source, SourceLocation::File(PathBuf::from("corpus/words.txt")));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(config.empty_tokens, EmptyTokenPolicy::Drop);
        assert_eq!(config.report_json, Some(PathBuf::from("report.json")));
        assert_eq!(config.chart_width, 30);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = from_pairs(&[(ENV_TOP_N, "  "), (ENV_REPORT_JSON, "")]).unwrap();
        assert_eq!(config.top_n, 20);
        assert_eq!(config.report_json, None);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = from_pairs(&[(ENV_TOP_N, "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_TOP_N, .. }));
    }

    #[test]
    fn garbage_timeout_is_rejected() {
        let err = from_pairs(&[(ENV_TIMEOUT_SECS, "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_TIMEOUT_SECS, .. }));
    }

    #[test]
    fn oversized_chart_width_is_rejected() {
        let err = from_pairs(&[(ENV_CHART_WIDTH, "18446744073709551615")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_CHART_WIDTH, .. }));

        let config = from_pairs(&[(ENV_CHART_WIDTH, "500")]).unwrap();
        assert_eq!(config.chart_width, MAX_BAR_WIDTH);
    }

    #[test]
    fn garbage_bool_is_rejected() {
        let err = from_pairs(&[(ENV_DROP_EMPTY, "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_DROP_EMPTY, .. }));
    }

    #[test]
    fn source_shape_selects_location() {
        assert_eq!(
            SourceLocation::parse("http://example.com/a.txt"),
            SourceLocation::Url("http://example.com/a.txt".to_string())
        );
        assert_eq!(
            SourceLocation::parse("./a.txt"),
            SourceLocation::File(PathBuf::from("./a.txt"))
        );
    }
}
