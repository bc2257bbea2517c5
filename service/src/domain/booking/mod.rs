//! [`Booking`] definitions.

pub mod price;
pub mod status;

use common::DateRange;
use derive_more::{Display, Error, From, FromStr, Into};
use uuid::Uuid;

pub use self::{
    price::{InvalidNightlyRate, PriceCalculator},
    status::{InvalidStatus, Status},
};

/// Rental booking of a [`DateRange`].
#[derive(Clone, Copy, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    id: Id,

    /// [`DateRange`] this [`Booking`] is made for.
    date_range: DateRange,

    /// Current [`Status`] of this [`Booking`].
    status: Status,
}

impl Booking {
    /// Creates a new [`Status::Active`] [`Booking`] of the provided
    /// [`DateRange`] with a freshly generated [`Id`].
    #[must_use]
    pub fn create(date_range: DateRange) -> Self {
        Self {
            id: Id::new(),
            date_range,
            status: Status::Active,
        }
    }

    /// Returns ID of this [`Booking`].
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns [`DateRange`] of this [`Booking`].
    #[must_use]
    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    /// Returns current [`Status`] of this [`Booking`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Indicates whether this [`Booking`] is [`Status::Active`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Cancels this [`Booking`].
    ///
    /// # Errors
    ///
    /// With [`NotActive`] if this [`Booking`] is not [`Status::Active`], in
    /// which case it stays untouched.
    pub fn cancel(&mut self) -> Result<(), NotActive> {
        if !self.is_active() {
            return Err(NotActive {
                id: self.id,
                status: self.status,
            });
        }
        self.status = Status::Cancelled;
        Ok(())
    }
}

/// ID of a [`Booking`].
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[expect(
        clippy::new_without_default,
        reason = "nil `Id` must not be constructible implicitly"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Error of operating on a [`Booking`] which is not [`Status::Active`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("`Booking(id: {id})` is not active, but `{status}`")]
pub struct NotActive {
    /// ID of the [`Booking`].
    pub id: Id,

    /// Actual [`Status`] of the [`Booking`].
    pub status: Status,
}
