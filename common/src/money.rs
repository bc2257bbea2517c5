//! [`Cents`]-related definitions.

use std::str::FromStr;

use derive_more::{Display, From, Into};

/// Amount of money in minor currency units.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Cents(i64);

impl Cents {
    /// Creates a new [`Cents`] amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount of these [`Cents`].
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Indicates whether these [`Cents`] are strictly greater than zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiplies these [`Cents`] by the provided `factor`, saturating at the
    /// numeric bounds.
    #[must_use]
    pub const fn saturating_mul(self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Subtracts the `other` [`Cents`], saturating at the numeric bounds.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl FromStr for Cents {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| "invalid cents amount")
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Amount of money in minor currency units, as an integer string.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Cents = super::Cents;

    impl Cents {
        fn to_output<S: ScalarValue>(c: &Cents) -> Value<S> {
            Value::scalar(c.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Cents` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    s.parse().map_err(|e| {
                        format!("Cannot parse `Cents` input scalar: {e}")
                    })
                })
        }
    }
}
