//! # Domain Models
//!
//! Quote records and the field table that ties the request format code to
//! the response column layout.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Parsed quote row, missing numbers read as `0.0` |
//! | [`RawQuote`] | Same row with numbers as `Option<f64>` |
//! | [`QuoteBatch`] | Quotes from one fetch, in row order |
//! | [`QuoteField`] | Field identifiers |
//! | [`FieldSpec`] | Token / column / kind binding of a field |

mod fields;
mod quote;

pub use fields::{
    column_count, field_spec, format_code, FieldKind, FieldSpec, QuoteField, QUOTE_FIELDS,
};
pub use quote::{parse_numeric, Quote, QuoteBatch, RawQuote};
