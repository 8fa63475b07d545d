use quoteline_core::QuoteError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Quote(QuoteError::InvalidConfig { .. }) => 2,
            Self::Quote(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_and_bad_config_exit_differently() {
        let timeout = CliError::from(QuoteError::Timeout {
            message: String::from("slow"),
        });
        let config = CliError::from(QuoteError::invalid_config("timeout_ms must be greater than zero"));

        assert_eq!(timeout.exit_code(), 3);
        assert_eq!(config.exit_code(), 2);
    }
}
