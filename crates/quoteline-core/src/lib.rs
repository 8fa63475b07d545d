//! # Quoteline Core
//!
//! Fetches quotes for a list of ticker symbols from a CSV quote service and
//! parses the rows into [`Quote`] records.
//!
//! ## Pipeline
//!
//! ```text
//! symbols ──▶ build_request_url ──▶ HttpClient::execute ──▶ parse_rows ──▶ Quote::from_row
//!                   ▲                                                         ▲
//!                   └──────────── QUOTE_FIELDS (format code / columns) ───────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`QuoteClient`], the fetch operation |
//! | [`config`] | [`ClientConfig`] defaults, env overrides, validation |
//! | [`domain`] | Quote records and the field table |
//! | [`error`] | [`QuoteError`] |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`parser`] | Lenient CSV tokenizing |
//! | [`request`] | Query URL construction |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quoteline_core::QuoteClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), quoteline_core::QuoteError> {
//!     let client = QuoteClient::new();
//!     let batch = client.get_quotes(&["GE", "AAPL"]).await?;
//!
//!     for quote in &batch {
//!         println!("{quote}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Missing values
//!
//! Numeric columns that are `N/A`, empty or unparseable read as `0.0` on
//! [`Quote`]. Use [`parser::parse_raw_quotes`] to get [`RawQuote`] values
//! where they are `None` instead.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod parser;
pub mod request;

pub use client::QuoteClient;

pub use config::{ClientConfig, DEFAULT_BASE_URL};

pub use domain::{
    format_code, FieldKind, FieldSpec, Quote, QuoteBatch, QuoteField, RawQuote, QUOTE_FIELDS,
};

pub use error::QuoteError;

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use parser::{parse_quotes, parse_rows};

pub use request::build_request_url;
