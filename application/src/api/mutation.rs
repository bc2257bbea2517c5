//! GraphQL [`Mutation`]s definitions.

use common::Date;
use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new active `Booking` between the provided dates (both
    /// inclusive) and returns its ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_DATE_RANGE` - `endDate` is not after `startDate`.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = %end_date,
            gql.name = "createBooking",
            otel.name = Self::SPAN_NAME,
            start_date = %start_date,
        ),
    )]
    pub async fn create_booking(
        start_date: Date,
        end_date: Date,
        ctx: &Context,
    ) -> Result<api::booking::Id, Error> {
        ctx.service()
            .execute(command::CreateBooking {
                start_date,
                end_date,
            })
            .await
            .map(Into::into)
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }
}
