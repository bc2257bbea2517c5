//! Calendar date utilities.

use std::{fmt, str::FromStr};

use derive_more::Error;
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// Format of a [`Date`] in its string representation.
const FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date without time and offset.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Returns the number of whole days from this [`Date`] until the `other`
    /// one.
    ///
    /// The result is negative if the `other` [`Date`] is earlier.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FORMAT).map(Self).map_err(ParseError)
    }
}

/// Error of parsing [`Date`] from a `YYYY-MM-DD` string.
#[derive(Clone, Copy, Debug, derive_more::Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar date in a `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = super::Date;

    impl Date {
        fn to_output<S: ScalarValue>(d: &Date) -> Value<S> {
            Value::scalar(d.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    s.parse().map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    #[test]
    fn parses_and_displays_iso_dates() {
        let date: Date = "2025-01-31".parse().unwrap();

        assert_eq!(date.to_string(), "2025-01-31");
        assert!(date < "2025-02-01".parse().unwrap());

        assert!("2025-02-30".parse::<Date>().is_err());
        assert!("2025/01/31".parse::<Date>().is_err());
        assert!("".parse::<Date>().is_err());
    }

    #[test]
    fn counts_days_between_dates() {
        let start: Date = "2025-01-01".parse().unwrap();
        let end: Date = "2025-03-01".parse().unwrap();

        assert_eq!(start.days_until(end), 59);
        assert_eq!(end.days_until(start), -59);
        assert_eq!(start.days_until(start), 0);
    }

    #[test]
    fn reports_parse_failure() {
        let err = "2025-13-01".parse::<Date>().unwrap_err();

        assert!(err.to_string().starts_with("invalid `YYYY-MM-DD` date: "));
    }
}
