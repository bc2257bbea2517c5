//! [`Status`] of a [`Booking`].

use common::define_kind;
use derive_more::{Display, Error, From};

#[cfg(doc)]
use super::Booking;

define_kind! {
    #[doc = "Lifecycle status of a [`Booking`]."]
    #[error = InvalidStatus]
    enum Status {
        #[doc = "[`Booking`] awaits confirmation."]
        Pending,

        #[doc = "[`Booking`] is confirmed."]
        Confirmed,

        #[doc = "[`Booking`] was cancelled."]
        Cancelled,

        #[doc = "[`Booking`] is in effect."]
        Active,
    }
}

/// Error of parsing a [`Status`] from an unknown code.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
#[display("invalid `Booking` status: {value}")]
pub struct InvalidStatus {
    /// Raw value that failed to parse.
    pub value: String,
}

#[cfg(test)]
mod spec {
    use strum::VariantArray as _;

    use super::{InvalidStatus, Status};

    #[test]
    fn parses_known_codes() {
        assert_eq!("active".parse::<Status>(), Ok(Status::Active));
        assert_eq!("pending".parse::<Status>(), Ok(Status::Pending));
        assert_eq!("confirmed".parse::<Status>(), Ok(Status::Confirmed));
        assert_eq!("cancelled".parse::<Status>(), Ok(Status::Cancelled));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "bogus".parse::<Status>(),
            Err(InvalidStatus {
                value: "bogus".to_owned(),
            }),
        );
        assert!("ACTIVE".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn closed_set_of_four() {
        assert_eq!(Status::VARIANTS.len(), 4);
        for status in Status::VARIANTS {
            assert_eq!(status.to_string().parse::<Status>(), Ok(*status));
        }
    }

    #[test]
    fn compared_by_value() {
        let parsed: Status = "cancelled".parse().unwrap();

        assert_eq!(parsed, Status::Cancelled);
        assert_ne!(parsed, Status::Active);
        assert_eq!(Status::Active.as_ref(), "active");
    }
}
