//! CLI argument definitions for quoteline.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | Yahoo `quotes.csv` | Quote service endpoint |
//! | `--timeout-ms` | `5000` | Request timeout in ms |
//!
//! ```bash
//! quoteline GE AAPL
//! quoteline GE --format json --pretty
//! QUOTELINE_TIMEOUT_MS=2000 quoteline EURUSD=X
//! ```

use clap::{Parser, ValueEnum};
use quoteline_core::config::{BASE_URL_ENV, TIMEOUT_MS_ENV};
use quoteline_core::ClientConfig;

/// Fetch quotes for one or more ticker symbols.
#[derive(Debug, Parser)]
#[command(name = "quoteline", author, version, about)]
pub struct Cli {
    /// Ticker symbols to quote. Sorted before the request is sent.
    #[arg(required = true, num_args = 1.., value_name = "SYMBOL")]
    pub symbols: Vec<String>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Quote service endpoint.
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, env = TIMEOUT_MS_ENV, default_value_t = 5_000)]
    pub timeout_ms: u64,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default().with_timeout_ms(self.timeout_ms);
        match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.as_str()),
            None => config,
        }
    }

    /// Symbols in the order they are submitted.
    pub fn sorted_symbols(&self) -> Vec<String> {
        let mut symbols = self.symbols.clone();
        symbols.sort();
        symbols
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per quote.
    Text,
    /// The whole batch as a single JSON object.
    Json,
    /// One JSON quote per line.
    Ndjson,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn symbols_are_sorted_lexicographically() {
        let cli = Cli::try_parse_from(["quoteline", "MSFT", "GE", "AAPL"]).expect("valid args");
        assert_eq!(cli.sorted_symbols(), vec!["AAPL", "GE", "MSFT"]);
        assert_eq!(cli.symbols, vec!["MSFT", "GE", "AAPL"]);
    }

    #[test]
    fn missing_symbols_is_a_usage_error() {
        let error = Cli::try_parse_from(["quoteline"]).expect_err("symbols are required");
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(error.exit_code(), 0);
    }

    #[test]
    fn flags_layer_over_default_config() {
        let cli = Cli::try_parse_from([
            "quoteline",
            "GE",
            "--base-url",
            "http://127.0.0.1:8080/quotes.csv",
            "--timeout-ms",
            "900",
            "--format",
            "ndjson",
        ])
        .expect("valid args");

        let config = cli.client_config();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/quotes.csv");
        assert_eq!(config.timeout_ms, 900);
        assert_eq!(cli.format, OutputFormat::Ndjson);
    }
}
