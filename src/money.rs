use std::fmt;

use rust_decimal::Decimal;

use crate::currency::CurrencyUnit;

/// A monetary value: a currency together with an exact decimal amount
///
/// This is the value produced by parsing and consumed by printing. It is a
/// plain immutable pair; monetary arithmetic is out of scope for this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    currency: CurrencyUnit,
    amount: Decimal,
}

impl Money {
    /// Creates a monetary value from a currency and an amount
    #[must_use]
    pub const fn new(currency: CurrencyUnit, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    /// The currency of this value
    #[must_use]
    pub const fn currency(&self) -> CurrencyUnit {
        self.currency
    }

    /// The exact decimal amount of this value
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether the amount is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Whether the amount is strictly negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Whether the amount is strictly positive
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}
