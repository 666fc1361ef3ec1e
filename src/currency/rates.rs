//! Supported display currencies and base-currency conversion rates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Display currency; plan amounts are held in EUR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::EUR, Currency::USD, Currency::GBP];

    /// ISO 4217 code
    pub fn code(self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::GBP => "£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ConfigError::UnknownCurrency(s.to_string()))
    }
}

/// Fallback rates used until a caller supplies fresher ones
pub const DEFAULT_USD_RATE: f64 = 1.09;
pub const DEFAULT_GBP_RATE: f64 = 0.86;

/// Units of each currency per one EUR
///
/// Rates are an external input. This table never refreshes itself; a
/// caller with newer rates builds a new table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default = "default_usd")]
    pub usd: f64,
    #[serde(default = "default_gbp")]
    pub gbp: f64,
}

fn default_usd() -> f64 {
    DEFAULT_USD_RATE
}

fn default_gbp() -> f64 {
    DEFAULT_GBP_RATE
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            usd: DEFAULT_USD_RATE,
            gbp: DEFAULT_GBP_RATE,
        }
    }
}

impl RateTable {
    pub fn new(usd: f64, gbp: f64) -> Self {
        Self { usd, gbp }
    }

    /// Rate from EUR into `currency`
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::EUR => 1.0,
            Currency::USD => self.usd,
            Currency::GBP => self.gbp,
        }
    }

    /// Convert a base (EUR) amount into `currency`
    pub fn from_base(&self, amount: f64, currency: Currency) -> f64 {
        amount * self.rate(currency)
    }

    /// Convert between any two supported currencies via EUR
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        let in_base = amount / self.rate(from);
        in_base * self.rate(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_currency_codes() {
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" GBP ".parse::<Currency>().unwrap(), Currency::GBP);
        assert!(matches!("JPY".parse::<Currency>(), Err(ConfigError::UnknownCurrency(_))));
    }

    #[test]
    fn test_default_rates() {
        let rates = RateTable::default();
        assert_eq!(rates.rate(Currency::EUR), 1.0);
        assert_eq!(rates.rate(Currency::USD), 1.09);
        assert_eq!(rates.rate(Currency::GBP), 0.86);
    }

    #[test]
    fn test_convert_between_currencies() {
        let rates = RateTable::new(1.10, 0.80);
        assert_abs_diff_eq!(rates.from_base(100.0, Currency::USD), 110.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            rates.convert(110.0, Currency::USD, Currency::GBP),
            80.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            rates.convert(80.0, Currency::GBP, Currency::EUR),
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rate_table_deserializes_with_defaults() {
        let rates: RateTable = serde_json::from_str(r#"{"usd": 1.2}"#).unwrap();
        assert_eq!(rates.usd, 1.2);
        assert_eq!(rates.gbp, DEFAULT_GBP_RATE);
    }
}
