//! Query URL construction.

use crate::domain::format_code;

/// Query parameter carrying the `+`-joined symbol list.
pub const SYMBOLS_PARAM: &str = "s";
/// Query parameter carrying the field format code.
pub const FORMAT_PARAM: &str = "f";

/// Join symbols with `+`, each one query-encoded.
///
/// Symbols are not validated: a symbol containing `+` will be split by the
/// service.
pub fn format_symbols<S: AsRef<str>>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(|symbol| urlencoding::encode(symbol.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Build the full quote URL. Any query already on `base_url` is replaced and
/// symbol order is kept as given.
pub fn build_request_url<S: AsRef<str>>(base_url: &str, symbols: &[S]) -> String {
    let base = base_url
        .split_once('?')
        .map_or(base_url, |(path, _)| path);

    format!(
        "{base}?{SYMBOLS_PARAM}={}&{FORMAT_PARAM}={}",
        format_symbols(symbols),
        format_code()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://download.finance.yahoo.com/d/quotes.csv";

    #[test]
    fn joins_symbols_with_plus_in_given_order() {
        let url = build_request_url(BASE, &["GE", "HHGTTG"]);
        assert_eq!(
            url,
            "http://download.finance.yahoo.com/d/quotes.csv?s=GE+HHGTTG&f=snpol1c1p2ghd1t1"
        );

        let reversed = build_request_url(BASE, &["HHGTTG", "GE"]);
        assert!(reversed.contains("s=HHGTTG+GE&"));
    }

    #[test]
    fn empty_symbol_list_is_not_rejected() {
        let symbols: [&str; 0] = [];
        let url = build_request_url(BASE, &symbols);
        assert!(url.contains("?s=&f=snpol1c1p2ghd1t1"));
    }

    #[test]
    fn existing_query_is_replaced() {
        let url = build_request_url("http://quotes.test/d/quotes.csv?s=OLD&e=.csv", &["GE"]);
        assert_eq!(url, "http://quotes.test/d/quotes.csv?s=GE&f=snpol1c1p2ghd1t1");
    }

    #[test]
    fn symbol_contents_get_query_encoding() {
        assert_eq!(format_symbols(&["EURUSD=X", "^GSPC", "BRK.B"]), "EURUSD%3DX+%5EGSPC+BRK.B");
    }
}
