use std::fmt::{Display, Formatter};

/// One field of a [`crate::Quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Symbol,
    Name,
    PreviousClose,
    Open,
    Price,
    Change,
    ChangePercent,
    DayLow,
    DayHigh,
    LastTradeDate,
    LastTradeTime,
    LastTrade,
}

impl QuoteField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Name => "name",
            Self::PreviousClose => "previous_close",
            Self::Open => "open",
            Self::Price => "price",
            Self::Change => "change",
            Self::ChangePercent => "change_percent",
            Self::DayLow => "day_low",
            Self::DayHigh => "day_high",
            Self::LastTradeDate => "last_trade_date",
            Self::LastTradeTime => "last_trade_time",
            Self::LastTrade => "last_trade",
        }
    }
}

impl Display for QuoteField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column's raw text becomes a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through verbatim.
    Text,
    /// Floating point, `N/A` or garbage reads as absent.
    Number,
    /// Like `Number`, after one trailing `%` is stripped.
    Percent,
}

/// Binding of a quote field to the wire: the format-code token requested
/// from the service and the response column it comes back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: QuoteField,
    /// `None` when the field reuses a column requested by another entry.
    pub token: Option<&'static str>,
    pub column: usize,
    pub kind: FieldKind,
}

const fn spec(
    field: QuoteField,
    token: Option<&'static str>,
    column: usize,
    kind: FieldKind,
) -> FieldSpec {
    FieldSpec {
        field,
        token,
        column,
        kind,
    }
}

/// The request format code and the response row layout, in column order.
pub const QUOTE_FIELDS: &[FieldSpec] = &[
    spec(QuoteField::Symbol, Some("s"), 0, FieldKind::Text),
    spec(QuoteField::Name, Some("n"), 1, FieldKind::Text),
    spec(QuoteField::PreviousClose, Some("p"), 2, FieldKind::Number),
    spec(QuoteField::Open, Some("o"), 3, FieldKind::Number),
    spec(QuoteField::Price, Some("l1"), 4, FieldKind::Number),
    spec(QuoteField::Change, Some("c1"), 5, FieldKind::Number),
    spec(QuoteField::ChangePercent, Some("p2"), 6, FieldKind::Percent),
    spec(QuoteField::DayLow, Some("g"), 7, FieldKind::Number),
    spec(QuoteField::DayHigh, Some("h"), 8, FieldKind::Number),
    spec(QuoteField::LastTradeDate, Some("d1"), 9, FieldKind::Text),
    spec(QuoteField::LastTradeTime, Some("t1"), 10, FieldKind::Text),
    // "l1" is the last trade price, already requested for `price`.
    spec(QuoteField::LastTrade, None, 4, FieldKind::Number),
];

/// Value of the `f` query parameter.
pub fn format_code() -> String {
    QUOTE_FIELDS.iter().filter_map(|spec| spec.token).collect()
}

/// Number of columns a complete response row carries.
pub fn column_count() -> usize {
    QUOTE_FIELDS
        .iter()
        .filter(|spec| spec.token.is_some())
        .count()
}

pub fn field_spec(field: QuoteField) -> Option<&'static FieldSpec> {
    QUOTE_FIELDS.iter().find(|spec| spec.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_code_follows_column_order() {
        assert_eq!(format_code(), "snpol1c1p2ghd1t1");
    }

    #[test]
    fn requested_columns_are_contiguous_and_unique() {
        let columns: Vec<usize> = QUOTE_FIELDS
            .iter()
            .filter(|spec| spec.token.is_some())
            .map(|spec| spec.column)
            .collect();

        assert_eq!(columns, (0..column_count()).collect::<Vec<_>>());
    }

    #[test]
    fn untokened_fields_point_at_a_requested_column() {
        for spec in QUOTE_FIELDS.iter().filter(|spec| spec.token.is_none()) {
            assert!(
                spec.column < column_count(),
                "{} reads column {} which is never requested",
                spec.field,
                spec.column
            );
        }
    }

    #[test]
    fn every_field_has_exactly_one_binding() {
        for spec in QUOTE_FIELDS {
            let bindings = QUOTE_FIELDS
                .iter()
                .filter(|other| other.field == spec.field)
                .count();
            assert_eq!(bindings, 1, "{} is bound more than once", spec.field);
        }
        assert_eq!(QUOTE_FIELDS.len(), 12);
    }

    #[test]
    fn change_percent_is_the_only_percent_field() {
        let percent = field_spec(QuoteField::ChangePercent).expect("bound");
        assert_eq!(percent.kind, FieldKind::Percent);
        assert_eq!(
            QUOTE_FIELDS
                .iter()
                .filter(|spec| spec.kind == FieldKind::Percent)
                .count(),
            1
        );
    }
}
