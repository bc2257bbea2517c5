//! [`PriceCalculator`] of a [`Booking`].

use common::{Cents, DateRange, Percent};
use derive_more::{Display, Error};

#[cfg(doc)]
use super::Booking;

/// Calculator of a total [`Booking`] price with a long-stay discount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceCalculator {
    /// Minimal number of days a [`DateRange`] should span for the discount
    /// to be applied.
    discount_threshold_days: u32,

    /// Discount applied to the total price of a long stay.
    discount: Percent,
}

impl PriceCalculator {
    /// Default minimal number of days to apply the discount for.
    pub const DISCOUNT_THRESHOLD_DAYS: u32 = 7;

    /// Default discount applied to a long stay.
    pub const DISCOUNT_PERCENT: u8 = 10;

    /// Creates a new [`PriceCalculator`] with the provided discount policy.
    #[must_use]
    pub const fn new(discount_threshold_days: u32, discount: Percent) -> Self {
        Self {
            discount_threshold_days,
            discount,
        }
    }

    /// Calculates the total price of staying the provided [`DateRange`] with
    /// the provided nightly rate.
    ///
    /// Fractional cents of the discount are truncated.
    ///
    /// # Errors
    ///
    /// With [`InvalidNightlyRate`] if the `nightly_rate` is not positive.
    pub fn calculate_total_cents(
        &self,
        date_range: &DateRange,
        nightly_rate: Cents,
    ) -> Result<Cents, InvalidNightlyRate> {
        if !nightly_rate.is_positive() {
            return Err(InvalidNightlyRate(nightly_rate));
        }

        let days = date_range.days();
        let total = nightly_rate.saturating_mul(days);

        if days >= i64::from(self.discount_threshold_days) {
            Ok(total.saturating_sub(self.discount.of(total)))
        } else {
            Ok(total)
        }
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self {
            discount_threshold_days: Self::DISCOUNT_THRESHOLD_DAYS,
            discount: Percent::new(Self::DISCOUNT_PERCENT)
                .unwrap_or_else(|| unreachable!("valid `Percent`")),
        }
    }
}

/// Error of calculating a price with a non-positive nightly rate.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("nightly rate must be positive, but `{_0}` provided")]
pub struct InvalidNightlyRate(#[error(not(source))] pub Cents);

#[cfg(test)]
mod spec {
    use common::{Cents, Date, DateRange, Percent};

    use super::{InvalidNightlyRate, PriceCalculator};

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(
            start.parse::<Date>().unwrap(),
            end.parse::<Date>().unwrap(),
        )
        .unwrap()
    }

    fn one_week() -> DateRange {
        range("2025-01-01", "2025-01-07")
    }

    #[test]
    fn discount_applied_from_seven_days() {
        let total = PriceCalculator::default()
            .calculate_total_cents(&one_week(), Cents::new(1000))
            .unwrap();

        assert_eq!(total, Cents::new(6300));
    }

    #[test]
    fn no_discount_under_threshold() {
        let total = PriceCalculator::default()
            .calculate_total_cents(
                &range("2025-01-01", "2025-01-06"),
                Cents::new(1000),
            )
            .unwrap();

        assert_eq!(total, Cents::new(6000));
    }

    #[test]
    fn discount_truncates_fractional_cents() {
        // 31 * 333 = 10323, discount is 1032.3
        let total = PriceCalculator::default()
            .calculate_total_cents(
                &range("2025-01-01", "2025-01-31"),
                Cents::new(333),
            )
            .unwrap();

        assert_eq!(total, Cents::new(9291));
    }

    #[test]
    fn rejects_non_positive_rate() {
        let calc = PriceCalculator::default();

        for rate in [0, -1, -1000, i64::MIN] {
            assert_eq!(
                calc.calculate_total_cents(&one_week(), Cents::new(rate)),
                Err(InvalidNightlyRate(Cents::new(rate))),
            );
        }
    }

    #[test]
    fn respects_custom_policy() {
        let calc = PriceCalculator::new(3, Percent::new(50).unwrap());

        assert_eq!(
            calc.calculate_total_cents(
                &range("2025-01-01", "2025-01-02"),
                Cents::new(1000),
            ),
            Ok(Cents::new(2000)),
        );
        assert_eq!(
            calc.calculate_total_cents(
                &range("2025-01-01", "2025-01-03"),
                Cents::new(1000),
            ),
            Ok(Cents::new(1500)),
        );
    }

    #[test]
    fn saturates_huge_totals() {
        let total = PriceCalculator::new(u32::MAX, Percent::new(0).unwrap())
            .calculate_total_cents(&one_week(), Cents::new(i64::MAX))
            .unwrap();

        assert_eq!(total, Cents::new(i64::MAX));
    }
}
