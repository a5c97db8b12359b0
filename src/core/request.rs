use crate::domain::model::ShippingOptions;
use crate::utils::error::{RatesError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

pub const OPERATION_NAME: &str = "RatesQuery";

/// Query document accepted by the remote schema. Argument and selection
/// lists must track the remote side; drift surfaces as GraphQL errors.
pub const RATES_QUERY: &str = r#"
      query RatesQuery($originZip: String!, $originCity: String, $originRegionCode: String, $destinationZip: String, $isResidential: Boolean, $destinationCountryCode: String, $weight: Float, $dimensionX: Float, $dimensionY: Float, $dimensionZ: Float, $mailClassKeys: [String!]!, $packageTypeKeys: [String!]!, $pricingTypes: [String!], $showUpsRatesWhen2x7Selected: Boolean) {
        rates(
          originZip: $originZip
          originCity: $originCity
          originRegionCode: $originRegionCode
          destinationZip: $destinationZip
          isResidential: $isResidential
          destinationCountryCode: $destinationCountryCode
          weight: $weight
          dimensionX: $dimensionX
          dimensionY: $dimensionY
          dimensionZ: $dimensionZ
          mailClassKeys: $mailClassKeys
          packageTypeKeys: $packageTypeKeys
          pricingTypes: $pricingTypes
          showUpsRatesWhen2x7Selected: $showUpsRatesWhen2x7Selected
        ) {
          title
          deliveryDescription
          trackingDescription
          serviceDescription
          pricingDescription
          cubicTier
          mailClassKey
          mailClass {
            accuracy
            international
            __typename
          }
          packageTypeKey
          zone
          surcharges {
            title
            price
            __typename
          }
          carrier {
            carrierKey
            title
            __typename
          }
          totalPrice
          priceBaseTypeKey
          basePrice
          crossedTotalPrice
          pricingType
          pricingSubType
          ratePeriodId
          learnMoreUrl
          cheapest
          fastest
          __typename
        }
      }
    "#;

/// JSON body POSTed to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesRequest {
    pub operation_name: &'static str,
    pub variables: Map<String, Value>,
    pub query: &'static str,
}

impl RatesRequest {
    /// Does no validation; run `validate_dimensions` first.
    pub fn new(options: &ShippingOptions) -> Result<Self> {
        Ok(Self {
            operation_name: OPERATION_NAME,
            variables: build_variables(options)?,
            query: RATES_QUERY,
        })
    }
}

/// Copies every provided option into the variable map under its wire name.
/// Absent options produce no key at all.
pub fn build_variables(options: &ShippingOptions) -> Result<Map<String, Value>> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        other => Err(RatesError::Config {
            message: format!("shipping options serialized to a non-object: {}", other),
        }),
    }
}
