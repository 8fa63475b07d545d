//! Response body tokenizing.
//!
//! The body is headerless CSV with one row per symbol. Quoting is handled
//! leniently: rows may be ragged, stray quotes stay inside their field and
//! invalid UTF-8 is replaced rather than rejected.

use crate::domain::{Quote, RawQuote};

/// Split a response body into rows of fields.
pub fn parse_rows(body: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .double_quote(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        match record {
            Ok(record) => rows.push(
                record
                    .iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect(),
            ),
            Err(error) => {
                tracing::warn!(row = index, %error, "stopping at unreadable csv record");
                break;
            }
        }
    }
    rows
}

/// Parse a response body into quotes, one per row.
pub fn parse_quotes(body: &str) -> Vec<Quote> {
    parse_rows(body)
        .iter()
        .map(|row| Quote::from_row(row))
        .collect()
}

/// Like [`parse_quotes`] but keeps missing numbers as `None`.
pub fn parse_raw_quotes(body: &str) -> Vec<RawQuote> {
    parse_rows(body)
        .iter()
        .map(|row| RawQuote::from_row(row))
        .collect()
}
