//! [`DateRange`]-related definitions.

use derive_more::{Display, Error};

use crate::Date;

/// Closed interval of two calendar [`Date`]s.
///
/// The `end` is always strictly after the `start`, so a [`DateRange`] spans at
/// least two days.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateRange {
    /// First [`Date`] of this [`DateRange`].
    start: Date,

    /// Last [`Date`] of this [`DateRange`].
    end: Date,
}

impl DateRange {
    /// Creates a new [`DateRange`] from the provided `start` and `end`.
    ///
    /// # Errors
    ///
    /// With [`InvalidDateRange`] if the `end` is not after the `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidDateRange> {
        if end <= start {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first [`Date`] of this [`DateRange`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last [`Date`] of this [`DateRange`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Checks whether the provided [`Date`] falls into this [`DateRange`],
    /// including its boundaries.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the number of calendar days spanned by this [`DateRange`],
    /// counting both the `start` and the `end`.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }
}

/// Error of constructing a [`DateRange`] whose `end` is not after its `start`.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("end date `{end}` must be after start date `{start}`")]
pub struct InvalidDateRange {
    /// Provided start [`Date`].
    pub start: Date,

    /// Provided end [`Date`].
    pub end: Date,
}

#[cfg(test)]
mod spec {
    use crate::Date;

    use super::{DateRange, InvalidDateRange};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn january_2025() -> DateRange {
        DateRange::new(date("2025-01-01"), date("2025-01-31")).unwrap()
    }

    #[test]
    fn created_when_dates_are_valid() {
        let range = january_2025();

        assert_eq!(range.start(), date("2025-01-01"));
        assert_eq!(range.end(), date("2025-01-31"));
    }

    #[test]
    fn rejects_end_not_after_start() {
        assert_eq!(
            DateRange::new(date("2024-01-10"), date("2024-01-01")),
            Err(InvalidDateRange {
                start: date("2024-01-10"),
                end: date("2024-01-01"),
            }),
        );
        assert!(DateRange::new(date("2025-01-31"), date("2025-01-01")).is_err());
        assert!(DateRange::new(date("2025-01-01"), date("2025-01-01")).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let range =
            DateRange::new(date("2024-01-01"), date("2024-01-10")).unwrap();

        assert!(range.contains(date("2024-01-05")));
        assert!(range.contains(date("2024-01-01")));
        assert!(range.contains(date("2024-01-10")));

        assert!(!range.contains(date("2023-12-31")));
        assert!(!range.contains(date("2024-01-11")));
        assert!(!range.contains(date("2024-01-20")));
    }

    #[test]
    fn days_counts_both_boundaries() {
        assert_eq!(january_2025().days(), 31);

        let week =
            DateRange::new(date("2025-01-01"), date("2025-01-07")).unwrap();
        assert_eq!(week.days(), 7);

        let shortest =
            DateRange::new(date("2025-01-01"), date("2025-01-02")).unwrap();
        assert_eq!(shortest.days(), 2);

        let leap =
            DateRange::new(date("2024-02-01"), date("2024-03-01")).unwrap();
        assert_eq!(leap.days(), 30);
    }
}
