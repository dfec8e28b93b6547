use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Currency used when neither the money nor the options name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A monetary amount in integer minor units (cents) with its ISO currency code.
///
/// The processor expects major units with two decimals on the wire, so
/// `Money::new(100, "USD")` is sent as `"1.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    minor: u64,
    currency: String,
}

impl Money {
    pub fn new(minor: u64, currency: impl Into<String>) -> Self {
        Self {
            minor,
            currency: currency.into(),
        }
    }

    /// Money in the gateway's default currency.
    pub fn from_minor(minor: u64) -> Self {
        Self::new(minor, DEFAULT_CURRENCY)
    }

    /// Builds money from a major-unit decimal such as `10.50`.
    ///
    /// Rejects negative amounts and amounts with sub-cent precision.
    pub fn from_major(amount: Decimal, currency: impl Into<String>) -> Result<Self> {
        if amount.is_sign_negative() {
            return Err(GatewayError::precondition("Amount must not be negative"));
        }
        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| GatewayError::precondition("Amount is out of range"))?;
        if !minor.fract().is_zero() {
            return Err(GatewayError::precondition(
                "Amount must have at most two decimal places",
            ));
        }
        let minor = minor
            .to_u64()
            .ok_or_else(|| GatewayError::precondition("Amount is out of range"))?;
        Ok(Self::new(minor, currency))
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The amount in major units, always carrying two decimal places.
    pub fn to_major(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.minor), 2)
    }

    /// Wire representation of the amount (`tran_amount`).
    pub fn format_amount(&self) -> String {
        self.to_major().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_uses_two_decimals() {
        assert_eq!(Money::from_minor(100).format_amount(), "1.00");
        assert_eq!(Money::from_minor(1).format_amount(), "0.01");
        assert_eq!(Money::from_minor(123456).format_amount(), "1234.56");
        assert_eq!(Money::from_minor(0).format_amount(), "0.00");
    }

    #[test]
    fn test_from_major() {
        let money = Money::from_major(dec!(10.5), "GBP").unwrap();
        assert_eq!(money.minor(), 1050);
        assert_eq!(money.currency(), "GBP");
        assert_eq!(money.to_major(), dec!(10.50));
    }

    #[test]
    fn test_from_major_rejects_invalid_amounts() {
        assert!(Money::from_major(dec!(-1.00), "USD").is_err());
        assert!(Money::from_major(dec!(1.001), "USD").is_err());
    }

    #[test]
    fn test_from_major_rejects_overflowing_amount() {
        let err = Money::from_major(Decimal::MAX, "USD").unwrap_err();
        assert!(matches!(err, GatewayError::Precondition(_)));

        let huge: Decimal = "7922816251426433759354395033.5".parse().unwrap();
        assert!(Money::from_major(huge, "USD").is_err());
    }

    #[test]
    fn test_default_currency() {
        assert_eq!(Money::from_minor(5).currency(), DEFAULT_CURRENCY);
    }
}
