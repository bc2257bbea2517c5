//! [`Query`] for calculating a total price of a booking.

use common::{Cents, Date, DateRange};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::booking::PriceCalculator;
use crate::{domain, Service};

use super::Query;

/// [`Query`] for calculating a total price of staying between the provided
/// [`Date`]s with the [`Service`]'s [`PriceCalculator`].
#[derive(Clone, Copy, Debug)]
pub struct BookingPrice {
    /// First [`Date`] of the stay.
    pub start_date: Date,

    /// Last [`Date`] of the stay.
    pub end_date: Date,

    /// Price of a single night.
    pub nightly_rate: Cents,
}

impl Query<BookingPrice> for Service {
    type Ok = Cents;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        query: BookingPrice,
    ) -> Result<Self::Ok, Self::Err> {
        let BookingPrice {
            start_date,
            end_date,
            nightly_rate,
        } = query;

        let date_range = DateRange::new(start_date, end_date)
            .map_err(ExecutionError::from)
            .map_err(tracerr::wrap!())?;

        self.config()
            .price_calculator
            .calculate_total_cents(&date_range, nightly_rate)
            .map_err(ExecutionError::from)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`BookingPrice`] [`Query`] execution.
pub type ExecutionError = domain::Error;

#[cfg(test)]
mod spec {
    use common::{Cents, Date, Percent};
    use futures::executor::block_on;

    use crate::{
        domain::{self, booking::PriceCalculator},
        Config, Query as _, Service,
    };

    use super::BookingPrice;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn one_week(nightly_rate: i64) -> BookingPrice {
        BookingPrice {
            start_date: date("2025-01-01"),
            end_date: date("2025-01-07"),
            nightly_rate: Cents::new(nightly_rate),
        }
    }

    #[test]
    fn prices_with_default_calculator() {
        let service = Service::new(Config::default());

        assert_eq!(
            block_on(service.execute(one_week(1000))).unwrap(),
            Cents::new(6300),
        );
    }

    #[test]
    fn prices_with_configured_calculator() {
        let service = Service::new(Config {
            price_calculator: PriceCalculator::new(
                8,
                Percent::new(20).unwrap(),
            ),
        });

        assert_eq!(
            block_on(service.execute(one_week(1000))).unwrap(),
            Cents::new(7000),
        );
    }

    #[test]
    fn propagates_domain_errors() {
        let service = Service::new(Config::default());

        let err = block_on(service.execute(one_week(0))).unwrap_err();
        assert!(matches!(err.as_ref(), domain::Error::NightlyRate(_)));

        let err = block_on(service.execute(BookingPrice {
            start_date: date("2025-01-07"),
            end_date: date("2025-01-01"),
            nightly_rate: Cents::new(1000),
        }))
        .unwrap_err();
        assert!(matches!(err.as_ref(), domain::Error::DateRange(_)));
    }
}
