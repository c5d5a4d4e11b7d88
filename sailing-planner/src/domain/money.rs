//! Monetary amounts and currency codes.

use std::fmt;
use std::ops::Add;

/// Exclusive bound on parsed amounts: eight integer digits.
const MAX_CENTS: i64 = 10_000_000_000;

/// Error returned when parsing an invalid decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {reason}")]
pub struct InvalidAmount {
    reason: &'static str,
}

impl InvalidAmount {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A non-negative decimal amount with two fraction digits.
///
/// Stored as a whole number of cents, so sums are exact and ordering is
/// total. Rendering trims trailing zeros but always keeps one fraction digit,
/// which is how rates appear in search results.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::Amount;
///
/// let rate = Amount::parse("250.50").unwrap();
/// assert_eq!(rate.cents(), 25050);
/// assert_eq!(rate.to_string(), "250.5");
///
/// assert_eq!(Amount::parse("100").unwrap().to_string(), "100.0");
/// assert_eq!(Amount::parse("1.235").unwrap().cents(), 124);
/// assert!(Amount::parse("1,5").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Parse a decimal string such as `"100"`, `"100.5"` or `"100.50"`.
    ///
    /// Extra fraction digits are rounded half away from zero to the cent.
    /// At most eight integer digits are accepted.
    pub fn parse(s: &str) -> Result<Self, InvalidAmount> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() {
            return Err(InvalidAmount::new("missing integer part"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(InvalidAmount::new("expected ASCII digits"));
        }

        let too_large = || InvalidAmount::new("amount too large");

        let mut cents: i64 = 0;
        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let cent_digits = [fraction_digits.next(), fraction_digits.next()];
        for digit in whole
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .chain(cent_digits.into_iter().map(|d| d.unwrap_or(0)))
        {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit))
                .filter(|c| *c < MAX_CENTS)
                .ok_or_else(too_large)?;
        }

        if fraction_digits.next().is_some_and(|d| d >= 5) {
            cents += 1;
        }
        if cents >= MAX_CENTS {
            return Err(too_large());
        }

        Ok(Self(cents))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Divide by an exchange rate, rounding to the nearest cent.
    ///
    /// Returns `None` if the rate is not a positive finite number.
    pub fn divide_by(self, rate: f64) -> Option<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return None;
        }
        let cents = (self.0 as f64 / rate).round();
        if !cents.is_finite() || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }
}

/// Saturates at the `i64` bounds.
impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / 100;
        let fraction = abs % 100;

        if fraction % 10 == 0 {
            write!(f, "{sign}{whole}.{}", fraction / 10)
        } else {
            write!(f, "{sign}{whole}.{fraction:02}")
        }
    }
}

/// Error returned when parsing an invalid currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code: {reason}")]
pub struct InvalidCurrency {
    reason: &'static str,
}

/// A 3-letter ISO 4217 currency code, stored uppercase.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::Currency;
///
/// let usd = Currency::parse("USD").unwrap();
/// assert_eq!(usd.as_str(), "USD");
/// assert!(!usd.is_eur());
/// assert!(Currency::EUR.is_eur());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    /// The euro, in which all search costs are expressed.
    pub const EUR: Currency = Currency(*b"EUR");

    /// Parse a currency code; must be exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCurrency> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCurrency {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidCurrency {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Currency([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns true for EUR.
    pub fn is_eur(&self) -> bool {
        *self == Self::EUR
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amounts() {
        assert_eq!(Amount::parse("0").unwrap().cents(), 0);
        assert_eq!(Amount::parse("7").unwrap().cents(), 700);
        assert_eq!(Amount::parse("7.5").unwrap().cents(), 750);
        assert_eq!(Amount::parse("7.05").unwrap().cents(), 705);
        assert_eq!(Amount::parse("100.00").unwrap().cents(), 10000);
        assert_eq!(Amount::parse("7.").unwrap().cents(), 700);
    }

    #[test]
    fn reject_bad_amounts() {
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse(".5").is_err());
        assert!(Amount::parse("-1").is_err());
        assert!(Amount::parse("1,5").is_err());
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("99999999999999999999").is_err());
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(Amount::from_cents(25050).to_string(), "250.5");
        assert_eq!(Amount::from_cents(10000).to_string(), "100.0");
        assert_eq!(Amount::from_cents(705).to_string(), "7.05");
        assert_eq!(Amount::from_cents(5).to_string(), "0.05");
        assert_eq!(Amount::ZERO.to_string(), "0.0");
        assert_eq!(Amount::from_cents(-250).to_string(), "-2.5");
    }

    #[test]
    fn extra_fraction_digits_round_half_away_from_zero() {
        assert_eq!(Amount::parse("100.005").unwrap().cents(), 10001);
        assert_eq!(Amount::parse("100.004").unwrap().cents(), 10000);
        assert_eq!(Amount::parse("1.2349").unwrap().cents(), 123);
        assert_eq!(Amount::parse("0.995").unwrap().cents(), 100);
    }

    #[test]
    fn amounts_are_capped_at_eight_integer_digits() {
        assert_eq!(
            Amount::parse("99999999.99").unwrap(),
            Amount::from_cents(9_999_999_999)
        );
        assert!(Amount::parse("100000000").is_err());
        assert!(Amount::parse("99999999.995").is_err());
        assert!(Amount::parse("50000000000000000.00").is_err());
    }

    #[test]
    fn addition_saturates() {
        let a = Amount::from_cents(30000);
        assert_eq!(a + a, Amount::from_cents(60000));

        let huge = Amount::from_cents(i64::MAX - 1);
        assert_eq!(huge + huge, Amount::from_cents(i64::MAX));
    }

    #[test]
    fn divide_by_rounds_to_cents() {
        let rate = Amount::parse("100.00").unwrap();
        assert_eq!(rate.divide_by(1.1), Some(Amount::from_cents(9091)));
        assert_eq!(rate.divide_by(1.0), Some(rate));
        assert_eq!(rate.divide_by(0.0), None);
        assert_eq!(rate.divide_by(-2.0), None);
        assert_eq!(rate.divide_by(f64::NAN), None);
    }

    #[test]
    fn currency_parsing() {
        assert!(Currency::parse("USD").is_ok());
        assert!(Currency::parse("usd").is_err());
        assert!(Currency::parse("US").is_err());
        assert!(Currency::parse("USDX").is_err());
        assert_eq!(Currency::parse("JPY").unwrap().as_str(), "JPY");
    }

    #[test]
    fn currency_display_and_eur() {
        let eur = Currency::parse("EUR").unwrap();
        assert_eq!(eur, Currency::EUR);
        assert!(eur.is_eur());
        assert_eq!(format!("{}", eur), "EUR");
        assert_eq!(format!("{:?}", eur), "Currency(EUR)");
    }
}
