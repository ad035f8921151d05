//! Monetary amounts underlying all price checks.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An immutable monetary amount.
///
/// Comparisons are numeric (scale-insensitive), so `10` and `10.00` are the
/// same amount. Arithmetic results are settled to two decimal places with
/// banker's rounding, matching how catalog prices are quoted.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_greater_than_zero(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }

    pub fn add(&self, other: &Money) -> Money {
        Money(Self::settle(self.0 + other.0))
    }

    pub fn subtract(&self, other: &Money) -> Money {
        Money(Self::settle(self.0 - other.0))
    }

    pub fn multiply(&self, factor: u32) -> Money {
        Money(Self::settle(self.0 * Decimal::from(factor)))
    }

    fn settle(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
