//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (paise for INR) to avoid
//! floating-point precision issues in cart and order totals. All
//! arithmetic that feeds an order summary is checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
///
/// INR is the default; the rest cover the wholesale trade corridors the
/// storefront sells into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    AED,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AED => "AED",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::AED => "AED ",
        }
    }

    /// Get the number of minor-unit digits for this currency.
    pub fn decimal_places(&self) -> u32 {
        // All supported currencies use two minor digits.
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "AED" => Some(Currency::AED),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (paise for INR,
/// cents for USD). This avoids floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in smallest currency unit (e.g., paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal major-unit amount.
    ///
    /// ```
    /// use quintal_commerce::money::{Money, Currency};
    /// let price = Money::from_major(49.99, Currency::INR);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_major(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create an INR value from rupees.
    pub fn from_rupees(amount: f64) -> Self {
        Self::from_major(amount, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Clamp a negative amount to zero, leaving positive amounts unchanged.
    pub fn clamp_at_zero(&self) -> Self {
        Self::new(self.amount_minor.max(0), self.currency)
    }

    /// Convert to a decimal major-unit value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₹49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch or overflow in addition")
    }

    /// Try to add another Money value.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics on currency mismatch or overflow.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch or overflow in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_sub(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar (e.g., a line quantity).
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Calculate a percentage of this amount (e.g., for GST).
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount_minor as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Try to sum an iterator of Money values with checked addition.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.try_multiply(factor)
            .expect("Overflow in multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::new(4999, Currency::INR);
        assert_eq!(m.amount_minor, 4999);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(49.99, Currency::INR);
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_rupees(100.0);
        assert_eq!(m.amount_minor, 10000);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(199900, Currency::INR);
        assert_eq!(m.display(), "\u{20b9}1999.00");

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(500, Currency::INR);
        let c = a + b;
        assert_eq!(c.amount_minor, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(300, Currency::INR);
        let c = a.subtract(&b);
        assert_eq!(c.amount_minor, 700);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert!(m.try_multiply(2).is_none());

        let m = Money::new(1000, Currency::INR);
        assert_eq!(m.try_multiply(3).unwrap().amount_minor, 3000);
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(10000, Currency::INR); // ₹100.00
        let gst = m.percentage(18.0);
        assert_eq!(gst.amount_minor, 1800); // ₹18.00
    }

    #[test]
    fn test_try_sum() {
        let values = vec![
            Money::new(100, Currency::INR),
            Money::new(200, Currency::INR),
            Money::new(300, Currency::INR),
        ];
        let total = Money::try_sum(values.iter(), Currency::INR).unwrap();
        assert_eq!(total.amount_minor, 600);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let inr = Money::new(1000, Currency::INR);
        let usd = Money::new(1000, Currency::USD);
        assert!(inr.try_add(&usd).is_none());
    }

    #[test]
    fn test_clamp_at_zero() {
        let negative = Money::new(-500, Currency::INR);
        assert_eq!(negative.clamp_at_zero().amount_minor, 0);

        let positive = Money::new(500, Currency::INR);
        assert_eq!(positive.clamp_at_zero().amount_minor, 500);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
