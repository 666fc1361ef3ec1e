//! Locale-aware money formatting

use serde::{Deserialize, Serialize};

use super::rates::{Currency, RateTable};

/// Formats a base-currency amount for display in a currency
///
/// Implementations receive the raw metric value and do their own
/// conversion and rounding.
pub trait CurrencyFormatter {
    fn format(&self, amount: f64, currency: Currency) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(f64, Currency) -> String,
{
    fn format(&self, amount: f64, currency: Currency) -> String {
        self(amount, currency)
    }
}

/// Number grouping conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "pt-PT")]
    PtPt,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
}

const NBSP: char = '\u{a0}';

impl Locale {
    /// Locale a currency is shown in when none is forced
    pub fn for_currency(currency: Currency) -> Self {
        match currency {
            Currency::EUR => Locale::PtPt,
            Currency::USD => Locale::EnUs,
            Currency::GBP => Locale::EnGb,
        }
    }

    fn group_separator(self) -> char {
        match self {
            Locale::PtPt => NBSP,
            Locale::EnUs | Locale::EnGb => ',',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::PtPt => ',',
            Locale::EnUs | Locale::EnGb => '.',
        }
    }

    /// Integer digits needed before grouping kicks in
    fn min_grouping_digits(self) -> usize {
        match self {
            Locale::PtPt => 5,
            Locale::EnUs | Locale::EnGb => 4,
        }
    }

    fn symbol_trails(self) -> bool {
        matches!(self, Locale::PtPt)
    }
}

/// Default formatter: converts through a rate table, two decimals,
/// grouping per locale
#[derive(Debug, Clone, Default)]
pub struct LocaleFormatter {
    rates: RateTable,
    locale: Option<Locale>,
}

impl LocaleFormatter {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            locale: None,
        }
    }

    /// Force one locale regardless of currency
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, amount: f64, currency: Currency) -> String {
        let locale = self.locale.unwrap_or_else(|| Locale::for_currency(currency));
        let converted = self.rates.from_base(amount, currency);
        format_money(converted, currency.symbol(), locale)
    }
}

/// Render an already-converted amount
///
/// Cents round half away from zero, deciding on the exact binary value.
/// Infinities render as `∞` and NaN as `NaN`, with the usual symbol.
pub fn format_money(amount: f64, symbol: &str, locale: Locale) -> String {
    let (negative, number) = if amount.is_nan() {
        (false, "NaN".to_string())
    } else if amount.is_infinite() {
        (amount < 0.0, "\u{221e}".to_string())
    } else {
        let fixed = two_decimals(amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        // -0.001 rounds to 0.00 and must not print a sign
        let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let number = format!(
            "{}{}{}",
            group_digits(int_part, locale),
            locale.decimal_separator(),
            frac_part
        );
        (negative, number)
    };
    let sign = if negative { "-" } else { "" };

    if locale.symbol_trails() {
        format!("{sign}{number}{NBSP}{symbol}")
    } else {
        format!("{sign}{symbol}{number}")
    }
}

/// `value` with two decimals, exact halves rounded up
///
/// `{:.2}` is exact but sends ties to even. A binary value sits exactly
/// on a half cent only when it is an odd number of eighths, and then its
/// three-decimal form is exact and ends in 5.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0;
    if !is_tie {
        return format!("{:.2}", value);
    }

    let exact = format!("{:.3}", value);
    let mut digits: Vec<u8> = exact[..exact.len() - 1].bytes().collect();
    // Hundredths of an odd eighth are 1, 3, 6 or 8, so there is no carry
    if let Some(last) = digits.last_mut() {
        *last += 1;
    }
    String::from_utf8(digits).unwrap_or(exact)
}

fn group_digits(int_part: &str, locale: Locale) -> String {
    if int_part.len() < locale.min_grouping_digits() {
        return int_part.to_string();
    }

    let sep = locale.group_separator();
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(amount: f64, currency: Currency) -> String {
        LocaleFormatter::default().format(amount, currency)
    }

    #[test]
    fn test_eur_portuguese_layout() {
        assert_eq!(fmt(6088.4, Currency::EUR), "6088,40\u{a0}€");
        assert_eq!(fmt(73060.8, Currency::EUR), "73\u{a0}060,80\u{a0}€");
        assert_eq!(fmt(1234567.891, Currency::EUR), "1\u{a0}234\u{a0}567,89\u{a0}€");
        assert_eq!(fmt(0.0, Currency::EUR), "0,00\u{a0}€");
    }

    #[test]
    fn test_usd_and_gbp_layout() {
        assert_eq!(fmt(1000.0, Currency::USD), "$1,090.00");
        assert_eq!(fmt(1000.0, Currency::GBP), "£860.00");
        assert_eq!(fmt(100_000.0, Currency::GBP), "£86,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(fmt(-1500.0, Currency::EUR), "-1500,00\u{a0}€");
        assert_eq!(
            LocaleFormatter::new(RateTable::new(1.0, 1.0)).format(-1500.0, Currency::USD),
            "-$1,500.00"
        );
        assert_eq!(fmt(-0.001, Currency::EUR), "0,00\u{a0}€");
    }

    #[test]
    fn test_forced_locale() {
        let formatter = LocaleFormatter::default().with_locale(Locale::EnUs);
        assert_eq!(formatter.format(12345.0, Currency::EUR), "€12,345.00");
    }

    #[test]
    fn test_closure_formatter() {
        let plain = |amount: f64, currency: Currency| format!("{} {:.2}", currency, amount);
        assert_eq!(plain.format(2.5, Currency::GBP), "GBP 2.50");
    }

    #[test]
    fn test_half_cents_round_away_from_zero() {
        let unit = LocaleFormatter::new(RateTable::new(1.0, 1.0));
        assert_eq!(unit.format(0.125, Currency::USD), "$0.13");
        assert_eq!(unit.format(10.625, Currency::USD), "$10.63");
        assert_eq!(unit.format(-0.375, Currency::USD), "-$0.38");
        assert_eq!(fmt(6088.125, Currency::EUR), "6088,13\u{a0}€");
        assert_eq!(fmt(12345.875, Currency::EUR), "12\u{a0}345,88\u{a0}€");
        // 1.005 is stored just below the half cent
        assert_eq!(unit.format(1.005, Currency::USD), "$1.00");
        assert_eq!(unit.format(0.25, Currency::USD), "$0.25");
    }

    #[test]
    fn test_non_finite_amounts() {
        assert_eq!(fmt(f64::INFINITY, Currency::EUR), "\u{221e}\u{a0}€");
        assert_eq!(fmt(f64::NEG_INFINITY, Currency::EUR), "-\u{221e}\u{a0}€");
        assert_eq!(fmt(f64::NAN, Currency::USD), "$NaN");
        assert_eq!(fmt(f64::NEG_INFINITY, Currency::GBP), "-£\u{221e}");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(group_digits("999", Locale::EnUs), "999");
        assert_eq!(group_digits("1000", Locale::EnUs), "1,000");
        assert_eq!(group_digits("9999", Locale::PtPt), "9999");
        assert_eq!(group_digits("10000", Locale::PtPt), "10\u{a0}000");
    }
}
