use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::fields::{FieldKind, QuoteField, QUOTE_FIELDS};
use crate::QuoteError;

const NOT_AVAILABLE: &str = "N/A";

/// One parsed quote row. Numeric fields the service could not supply are `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub previous_close: f64,
    pub open: f64,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub day_low: f64,
    pub day_high: f64,
    pub last_trade: f64,
    pub last_trade_date: String,
    pub last_trade_time: String,
}

impl Quote {
    /// Map a response row onto a quote by column position.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        RawQuote::from_row(row).into_quote()
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {:.2} {:+.2} ({:+.2}%) open {:.2} prev {:.2} range {:.2}-{:.2} last {:.2} at {} {}",
            self.symbol,
            self.name,
            self.price,
            self.change,
            self.change_percent,
            self.open,
            self.previous_close,
            self.day_low,
            self.day_high,
            self.last_trade,
            self.last_trade_date,
            self.last_trade_time,
        )
    }
}

/// A quote row before missing numbers are collapsed to zero.
///
/// `None` means the column was absent, `N/A`, or not a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQuote {
    pub symbol: String,
    pub name: String,
    pub previous_close: Option<f64>,
    pub open: Option<f64>,
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub day_low: Option<f64>,
    pub day_high: Option<f64>,
    pub last_trade: Option<f64>,
    pub last_trade_date: String,
    pub last_trade_time: String,
}

impl RawQuote {
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let mut raw = Self::default();
        for spec in QUOTE_FIELDS {
            let cell = row.get(spec.column).map(AsRef::as_ref).unwrap_or("");
            match spec.kind {
                FieldKind::Text => {
                    if let Some(slot) = raw.text_slot(spec.field) {
                        *slot = cell.to_owned();
                    }
                }
                FieldKind::Number | FieldKind::Percent => {
                    if let Some(slot) = raw.number_slot(spec.field) {
                        *slot = parse_numeric(cell, spec.kind);
                    }
                }
            }
        }
        raw
    }

    pub fn into_quote(self) -> Quote {
        Quote {
            symbol: self.symbol,
            name: self.name,
            previous_close: self.previous_close.unwrap_or_default(),
            open: self.open.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            change: self.change.unwrap_or_default(),
            change_percent: self.change_percent.unwrap_or_default(),
            day_low: self.day_low.unwrap_or_default(),
            day_high: self.day_high.unwrap_or_default(),
            last_trade: self.last_trade.unwrap_or_default(),
            last_trade_date: self.last_trade_date,
            last_trade_time: self.last_trade_time,
        }
    }

    fn text_slot(&mut self, field: QuoteField) -> Option<&mut String> {
        match field {
            QuoteField::Symbol => Some(&mut self.symbol),
            QuoteField::Name => Some(&mut self.name),
            QuoteField::LastTradeDate => Some(&mut self.last_trade_date),
            QuoteField::LastTradeTime => Some(&mut self.last_trade_time),
            _ => None,
        }
    }

    fn number_slot(&mut self, field: QuoteField) -> Option<&mut Option<f64>> {
        match field {
            QuoteField::PreviousClose => Some(&mut self.previous_close),
            QuoteField::Open => Some(&mut self.open),
            QuoteField::Price => Some(&mut self.price),
            QuoteField::Change => Some(&mut self.change),
            QuoteField::ChangePercent => Some(&mut self.change_percent),
            QuoteField::DayLow => Some(&mut self.day_low),
            QuoteField::DayHigh => Some(&mut self.day_high),
            QuoteField::LastTrade => Some(&mut self.last_trade),
            _ => None,
        }
    }
}

/// Lenient numeric parse used for every numeric column.
///
/// Returns `None` for `N/A`, empty cells, non-numbers and non-finite values.
pub fn parse_numeric(cell: &str, kind: FieldKind) -> Option<f64> {
    let mut value = cell.trim();
    if kind == FieldKind::Percent {
        value = value.strip_suffix('%').unwrap_or(value).trim_end();
    }
    if value.is_empty() || value == NOT_AVAILABLE {
        return None;
    }
    value.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Quotes from one fetch, in response row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBatch {
    pub quotes: Vec<Quote>,
    /// How many symbols were asked for.
    pub requested: usize,
}

impl QuoteBatch {
    pub fn new(quotes: Vec<Quote>, requested: usize) -> Self {
        Self { quotes, requested }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// False when the service answered with fewer rows than symbols requested.
    pub fn is_complete(&self) -> bool {
        self.quotes.len() >= self.requested
    }

    pub fn quote_at(&self, index: usize) -> Result<&Quote, QuoteError> {
        self.quotes.get(index).ok_or(QuoteError::RowOutOfRange {
            index,
            len: self.quotes.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn into_quotes(self) -> Vec<Quote> {
        self.quotes
    }
}

impl IntoIterator for QuoteBatch {
    type Item = Quote;
    type IntoIter = std::vec::IntoIter<Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuoteBatch {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
