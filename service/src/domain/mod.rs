//! Domain definitions.

pub mod booking;

use common::InvalidDateRange;
use derive_more::{Display, Error as StdError, From};

pub use self::booking::Booking;

/// Violation of a business rule of the domain.
#[derive(Clone, Debug, Display, Eq, From, PartialEq, StdError)]
pub enum Error {
    /// [`common::DateRange`] is invalid.
    DateRange(InvalidDateRange),

    /// [`booking::Status`] is unknown.
    BookingStatus(booking::InvalidStatus),

    /// [`Booking`] is not active.
    BookingNotActive(booking::NotActive),

    /// Nightly rate of a [`Booking`] is invalid.
    NightlyRate(booking::InvalidNightlyRate),
}

#[cfg(test)]
mod spec {
    use std::error::Error as _;

    use common::{Cents, Date, DateRange};

    use super::{booking, Booking, Error};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn wraps_every_business_rule_violation() {
        let range_err =
            DateRange::new(date("2025-01-07"), date("2025-01-01")).unwrap_err();
        let status_err = "bogus".parse::<booking::Status>().unwrap_err();
        let rate_err = booking::InvalidNightlyRate(Cents::new(0));
        let mut booking = Booking::create(
            DateRange::new(date("2025-01-01"), date("2025-01-07")).unwrap(),
        );
        booking.cancel().unwrap();
        let cancel_err = booking.cancel().unwrap_err();

        assert_eq!(Error::from(range_err), Error::DateRange(range_err));
        assert_eq!(
            Error::from(status_err.clone()).to_string(),
            status_err.to_string(),
        );
        assert_eq!(
            Error::from(rate_err).to_string(),
            "nightly rate must be positive, but `0` provided",
        );
        assert_eq!(
            Error::from(cancel_err),
            Error::BookingNotActive(cancel_err),
        );
        assert!(Error::from(range_err).source().is_some());
    }
}
