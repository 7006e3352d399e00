//! The currencies the dashboard can display, and currency formatting.

use std::fmt;

use numfmt::{Formatter, Precision};
use serde::{Deserialize, Serialize};

/// A currency the dashboard can display amounts in.
///
/// Amounts are always stored in USD; the display currency only affects how
/// figures are projected and labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar, the base currency for all stored amounts.
    #[default]
    Usd,
    /// Brazilian real.
    Brl,
    /// Hungarian forint.
    Huf,
    /// Euro.
    Eur,
}

impl Currency {
    /// Every supported display currency, in the order shown in the selector.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Brl, Currency::Huf, Currency::Eur];

    /// The ISO 4217 code used to key the exchange-rate table.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
            Currency::Huf => "HUF",
            Currency::Eur => "EUR",
        }
    }

    /// The symbol shown before formatted amounts.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Brl => "R$",
            Currency::Huf => "Ft",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Format `amount` with the symbol of `currency`, a thousands separator, and
/// two decimal places, e.g. `-R$1,234.50`.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let symbol = currency.symbol();

    if amount == 0.0 {
        return format!("{symbol}0.00");
    }

    let prefix = if amount < 0.0 {
        format!("-{symbol}")
    } else {
        symbol.to_owned()
    };

    let formatter = Formatter::currency(&prefix)
        .expect("currency symbols are valid prefixes")
        .precision(Precision::Decimals(2));

    let mut formatted = formatter.fmt_string(amount.abs());

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::{Currency, format_amount};

    #[test]
    fn formats_positive_amounts_with_separator() {
        assert_eq!(format_amount(1234.5, Currency::Usd), "$1,234.50");
    }

    #[test]
    fn formats_negative_amounts_with_leading_sign() {
        assert_eq!(format_amount(-800.0, Currency::Brl), "-R$800.00");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_amount(0.0, Currency::Eur), "€0.00");
    }

    #[test]
    fn keeps_both_decimal_places() {
        assert_eq!(format_amount(12.3, Currency::Usd), "$12.30");
        assert_eq!(format_amount(12.34, Currency::Usd), "$12.34");
    }

    #[test]
    fn symbols_match_codes() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Brl.symbol(), "R$");
        assert_eq!(Currency::Huf.symbol(), "Ft");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Huf.code(), "HUF");
    }

    #[test]
    fn serializes_as_uppercase_code() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"BRL\"").unwrap(),
            Currency::Brl
        );
    }

    #[test]
    fn defaults_to_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
