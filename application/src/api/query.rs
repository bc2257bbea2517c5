//! GraphQL [`Query`]s definitions.

use common::{Cents, Date};
use juniper::graphql_object;
use service::{query, Query as _};

use crate::{AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Calculates the total price of staying between the provided dates (both
    /// inclusive) for the provided nightly rate.
    ///
    /// Long stays are discounted.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_DATE_RANGE` - `endDate` is not after `startDate`;
    /// - `INVALID_NIGHTLY_RATE` - `nightlyRateCents` is not positive.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = %end_date,
            gql.name = "bookingPrice",
            nightly_rate_cents = %nightly_rate_cents,
            otel.name = Self::SPAN_NAME,
            start_date = %start_date,
        ),
    )]
    pub async fn booking_price(
        start_date: Date,
        end_date: Date,
        nightly_rate_cents: Cents,
        ctx: &Context,
    ) -> Result<Cents, Error> {
        ctx.service()
            .execute(query::BookingPrice {
                start_date,
                end_date,
                nightly_rate: nightly_rate_cents,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }
}
