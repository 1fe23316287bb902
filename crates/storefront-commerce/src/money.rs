//! Prices in integer minor units.
//!
//! The content store sends prices as JSON numbers. They are converted to
//! minor units once, and all arithmetic and formatting happens on integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currency for prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

/// Static facts about a currency.
struct CurrencyInfo {
    code: &'static str,
    symbol: &'static str,
    minor_digits: u32,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::EUR, Currency::GBP, Currency::JPY];

    const fn info(self) -> CurrencyInfo {
        match self {
            Currency::USD => CurrencyInfo { code: "USD", symbol: "$", minor_digits: 2 },
            Currency::EUR => CurrencyInfo { code: "EUR", symbol: "\u{20ac}", minor_digits: 2 },
            Currency::GBP => CurrencyInfo { code: "GBP", symbol: "\u{00a3}", minor_digits: 2 },
            Currency::JPY => CurrencyInfo { code: "JPY", symbol: "\u{00a5}", minor_digits: 0 },
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        self.info().code
    }

    /// Symbol prefixed to displayed amounts.
    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    /// Digits after the decimal point.
    pub fn decimal_places(&self) -> u32 {
        self.info().minor_digits
    }

    /// Look up a currency by ISO code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code.trim()))
    }

    fn minor_per_major(self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in a currency's minor unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor units.
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a price as the content store sends it, rounding to the nearest minor unit.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(minor, currency)
    }

    /// Price formatted with symbol and fixed decimals, e.g. `$40.00`.
    pub fn display(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let major = abs / per_major as u64;

        match self.currency.decimal_places() {
            0 => format!("{}{}{}", sign, self.currency.symbol(), major),
            places => format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency.symbol(),
                major,
                abs % per_major as u64,
                width = places as usize
            ),
        }
    }

    /// What remains after taking `percent` percent off, rounded to the nearest minor unit.
    pub fn percentage_off(&self, percent: f64) -> Money {
        let remaining = self.amount_cents as f64 * (100.0 - percent) / 100.0;
        Money::new(remaining.round() as i64, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2, Currency::USD).amount_cents, 30);
        assert_eq!(Money::from_decimal(100.0, Currency::JPY).amount_cents, 100);
    }

    #[test]
    fn test_display_pads_minor_units() {
        assert_eq!(Money::new(4000, Currency::USD).display(), "$40.00");
        assert_eq!(Money::new(1205, Currency::USD).display(), "$12.05");
        assert_eq!(Money::new(7, Currency::GBP).display(), "\u{00a3}0.07");
        assert_eq!(Money::new(100, Currency::JPY).to_string(), "\u{00a5}100");
        assert_eq!(Money::new(-250, Currency::USD).display(), "-$2.50");
    }

    #[test]
    fn test_percentage_off() {
        let m = Money::new(5000, Currency::USD);
        assert_eq!(m.percentage_off(20.0).amount_cents, 4000);
        assert_eq!(m.percentage_off(0.0).amount_cents, 5000);
        assert_eq!(m.percentage_off(100.0).amount_cents, 0);
        // 19.99 * 0.85 = 16.9915
        assert_eq!(Money::new(1999, Currency::USD).percentage_off(15.0).display(), "$16.99");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code(" eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
