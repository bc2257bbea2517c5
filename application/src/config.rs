//! [`Config`]-related definitions.

use common::Percent;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use serde::Deserialize;
use service::domain::booking::PriceCalculator;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Booking pricing configuration.
    pub pricing: Pricing,
}

impl TryFrom<Service> for service::Config {
    type Error = InvalidPricing;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            pricing:
                Pricing {
                    discount_threshold_days,
                    discount_percent,
                },
        } = value;

        let discount = Percent::new(discount_percent)
            .ok_or(InvalidPricing::DiscountPercent(discount_percent))?;

        Ok(Self {
            price_calculator: PriceCalculator::new(
                discount_threshold_days,
                discount,
            ),
        })
    }
}

/// Booking pricing configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// Minimal number of days a stay should span to be discounted.
    #[default(PriceCalculator::DISCOUNT_THRESHOLD_DAYS)]
    pub discount_threshold_days: u32,

    /// Discount of a long stay, in percents.
    #[default(PriceCalculator::DISCOUNT_PERCENT)]
    pub discount_percent: u8,
}

/// Error of converting [`Pricing`] into a [`PriceCalculator`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum InvalidPricing {
    /// Discount is not a valid [`Percent`].
    #[display("`discount_percent` must not exceed 100, but is `{_0}`")]
    DiscountPercent(#[error(not(source))] u8),
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use service::domain::booking::PriceCalculator;

    use super::{Config, InvalidPricing, Pricing, Service};

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            service::Config::try_from(config.service)
                .unwrap()
                .price_calculator,
            PriceCalculator::default(),
        );
    }

    #[test]
    fn loads_missing_file_as_defaults() {
        let config = Config::new("definitely-missing-config").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.service.pricing.discount_threshold_days, 7);
        assert_eq!(config.service.pricing.discount_percent, 10);
    }

    #[test]
    fn rejects_discount_over_hundred_percent() {
        let service = Service {
            pricing: Pricing {
                discount_threshold_days: 7,
                discount_percent: 101,
            },
        };

        assert!(matches!(
            service::Config::try_from(service),
            Err(InvalidPricing::DiscountPercent(101)),
        ));
    }
}
