//! Display currencies, conversion rates and money formatting
//!
//! Plan amounts are always held in EUR. Rates are supplied from outside
//! and may be stale; formatting never fetches anything.

mod rates;
mod format;

pub use rates::{Currency, RateTable, DEFAULT_USD_RATE, DEFAULT_GBP_RATE};
pub use format::{CurrencyFormatter, LocaleFormatter, Locale, format_money};
