//! [`Query`] definition.

pub mod booking_price;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::booking_price::BookingPrice;
