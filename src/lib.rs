//! Typed client for the shipping rates GraphQL query.
//!
//! Options are checked against the minimum package dimensions, sent as a
//! single `RatesQuery` POST, and the quotes in the response are returned
//! unchanged.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::config::LookupConfig;
pub use crate::core::client::{fetch_shipping_rates, RatesClient, DEFAULT_ENDPOINT};
pub use crate::core::request::{build_variables, RatesRequest, OPERATION_NAME, RATES_QUERY};
pub use crate::core::validator::validate_dimensions;
pub use crate::domain::model::{
    Carrier, CarrierKey, DimensionField, MailClass, MailClassKey, PackageType, Rate, RateError,
    RatesEnvelope, ShippingOptions, Surcharge,
};
pub use crate::domain::ports::RatesProvider;
pub use crate::utils::error::{ErrorKind, RatesError, Result};
