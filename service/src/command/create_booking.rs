//! [`Command`] for creating a new [`Booking`].

use common::{Date, DateRange, InvalidDateRange};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking, Booking},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Booking`].
#[derive(Clone, Copy, Debug)]
pub struct CreateBooking {
    /// First [`Date`] of a new [`Booking`].
    pub start_date: Date,

    /// Last [`Date`] of a new [`Booking`].
    pub end_date: Date,
}

impl Command<CreateBooking> for Service {
    type Ok = booking::Id;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateBooking {
            start_date,
            end_date,
        } = cmd;

        let date_range =
            DateRange::new(start_date, end_date).map_err(tracerr::wrap!())?;
        let booking = Booking::create(date_range);

        log::debug!(
            "created `Booking(id: {})` for `{start_date}..={end_date}`",
            booking.id(),
        );

        Ok(booking.id())
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
pub type ExecutionError = InvalidDateRange;
