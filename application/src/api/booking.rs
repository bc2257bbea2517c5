//! Booking-related definitions.

use derive_more::{Display, From, Into};
use juniper::GraphQLScalar;
use service::domain;
use uuid::Uuid;

use crate::{define_error, AsError, Error};

/// Unique identifier of a `Booking`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::booking::Id)]
#[into(domain::booking::Id)]
#[graphql(name = "BookingId", transparent)]
pub struct Id(Uuid);

define_error! {
    enum BookingError {
        #[code = "INVALID_DATE_RANGE"]
        #[status = BAD_REQUEST]
        #[message = "End date must be after start date"]
        InvalidDateRange,

        #[code = "INVALID_BOOKING_STATUS"]
        #[status = BAD_REQUEST]
        #[message = "Unknown `Booking` status"]
        InvalidStatus,

        #[code = "BOOKING_NOT_ACTIVE"]
        #[status = CONFLICT]
        #[message = "`Booking` is not active"]
        NotActive,

        #[code = "INVALID_NIGHTLY_RATE"]
        #[status = BAD_REQUEST]
        #[message = "Nightly rate must be positive"]
        InvalidNightlyRate,
    }
}

impl AsError for common::InvalidDateRange {
    fn try_as_error(&self) -> Option<Error> {
        Some(BookingError::InvalidDateRange.into())
    }
}

impl AsError for domain::Error {
    fn try_as_error(&self) -> Option<Error> {
        use BookingError as E;

        Some(
            match self {
                Self::DateRange(_) => E::InvalidDateRange,
                Self::BookingStatus(_) => E::InvalidStatus,
                Self::BookingNotActive(_) => E::NotActive,
                Self::NightlyRate(_) => E::InvalidNightlyRate,
            }
            .into(),
        )
    }
}
