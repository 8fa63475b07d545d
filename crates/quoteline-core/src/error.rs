use thiserror::Error;

use crate::http_client::{HttpError, HttpErrorKind};

/// Errors surfaced by quote fetching.
///
/// Malformed numeric fields never show up here: they are coerced to `0.0`
/// while the row is mapped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("quote request timed out: {message}")]
    Timeout { message: String },

    #[error("quote request failed: {message}")]
    Transport { message: String },

    #[error("failed to read quote response body: {message}")]
    Read { message: String },

    #[error("quote service returned status {status}")]
    Status { status: u16 },

    #[error("row index {index} is out of range for {len} parsed quote(s)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("invalid client configuration: {message}")]
    InvalidConfig { message: String },
}

impl QuoteError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "quote.timeout",
            Self::Transport { .. } => "quote.transport",
            Self::Read { .. } => "quote.read",
            Self::Status { .. } => "quote.status",
            Self::RowOutOfRange { .. } => "quote.row_out_of_range",
            Self::InvalidConfig { .. } => "quote.invalid_config",
        }
    }
}

impl From<HttpError> for QuoteError {
    fn from(error: HttpError) -> Self {
        let message = error.message().to_owned();
        match error.kind() {
            HttpErrorKind::Timeout => Self::Timeout { message },
            HttpErrorKind::Connect | HttpErrorKind::Request => Self::Transport { message },
            HttpErrorKind::Body => Self::Read { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_kinds_map_to_distinct_errors() {
        let timeout = QuoteError::from(HttpError::new(HttpErrorKind::Timeout, "slow"));
        let connect = QuoteError::from(HttpError::new(HttpErrorKind::Connect, "refused"));
        let body = QuoteError::from(HttpError::new(HttpErrorKind::Body, "truncated"));

        assert_eq!(timeout.code(), "quote.timeout");
        assert_eq!(connect.code(), "quote.transport");
        assert_eq!(body.code(), "quote.read");
    }

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let error = QuoteError::RowOutOfRange { index: 2, len: 1 };
        assert_eq!(
            error.to_string(),
            "row index 2 is out of range for 1 parsed quote(s)"
        );
    }
}
