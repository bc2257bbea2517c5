//! [`Percent`]-related definitions.

use derive_more::Display;

use crate::Cents;

/// Whole-number percentage between `0` and `100`.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(u8);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is not
    /// greater than `100`.
    #[must_use]
    pub const fn new(val: u8) -> Option<Self> {
        if val > 100 {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Calculates this [`Percent`] of the provided amount, rounding towards
    /// zero.
    ///
    /// Never overflows, as no intermediate product exceeds the `amount`.
    #[must_use]
    pub fn of(self, amount: Cents) -> Cents {
        let amount = amount.amount();
        let pct = i64::from(self.0);
        Cents::new(amount / 100 * pct + amount % 100 * pct / 100)
    }
}
