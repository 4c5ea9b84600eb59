//! Type-safe price representation using decimal arithmetic.
//!
//! All ONGO prices are Swedish kronor. The wire format is a plain JSON
//! number (`299`), the shelf format is `299:-`.

use core::fmt;
use core::ops::Sub;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// A price in Swedish kronor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "rust_decimal::serde::float::deserialize"
    )]
    Decimal,
);

/// Whole kronor go on the wire as integers (`299`, not `299.0`).
fn serialize_amount<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let amount = amount.normalize();
    if amount.fract().is_zero()
        && let Some(whole) = amount.to_i64()
    {
        return serializer.serialize_i64(whole);
    }
    rust_decimal::serde::float::serialize(&amount, serializer)
}

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of kronor.
    #[must_use]
    pub fn from_kronor(kronor: i64) -> Self {
        Self(Decimal::from(kronor))
    }

    /// The decimal amount in kronor.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for the shelf label: `299:-`, or `49,50:-` with öre.
    #[must_use]
    pub fn display(&self) -> String {
        let amount = self.0.normalize();
        if amount.fract().is_zero() {
            format!("{}:-", amount.trunc())
        } else {
            format!("{:.2}:-", amount.round_dp(2)).replace('.', ",")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
