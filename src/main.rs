use std::process::ExitCode;

use word_histogram::config::{Config, SourceLocation};
use word_histogram::controller::HistogramController;
use word_histogram::frequency::{FrequencyAnalyzer, WordTokenizer};
use word_histogram::logging;
use word_histogram::run::run_once;
use word_histogram::source::{FileSource, HttpSource, TextSource};

async fn run<S: TextSource>(source: S, config: &Config) -> ExitCode {
    let analyzer = match FrequencyAnalyzer::new(WordTokenizer::new(config.empty_tokens), config.top_n) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let controller = HistogramController::new(source, analyzer, config.timeout);

    match run_once(&controller, config).await {
        Ok(outcome) => {
            print!("{}", outcome.chart);
            println!("Exported {}", outcome.csv_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !e.already_logged() {
                log::error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    logging::init();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(2);
        }
    };
    if let Some(arg) = std::env::args().nth(1) {
        config.source = SourceLocation::parse(&arg);
    }

    match &config.source {
        SourceLocation::Url(url) => match HttpSource::new(url.as_str(), config.timeout) {
            Ok(source) => run(source, &config).await,
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        },
        SourceLocation::File(path) => run(FileSource::new(path), &config).await,
    }
}
