use crate::utils::error::RatesError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Closed selector sets. Wire names are the variant names unless renamed.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RatesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| RatesError::UnknownKey {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum! {
    /// USPS container categories accepted by the unauthenticated rates endpoint.
    PackageType, "package type" {
        SoftEnvelope => "SoftEnvelope",
        Parcel => "Parcel",
        Irregular => "Irregular",
        FlatRateEnvelope => "FlatRateEnvelope",
        FlatRateLegalEnvelope => "FlatRateLegalEnvelope",
        FlatRatePaddedEnvelope => "FlatRatePaddedEnvelope",
        SmallFlatRateBox => "SmallFlatRateBox",
        MediumFlatRateBox => "MediumFlatRateBox",
        LargeFlatRateBox => "LargeFlatRateBox",
        ExpressFlatRateEnvelope => "ExpressFlatRateEnvelope",
        ExpressFlatRateLegalEnvelope => "ExpressFlatRateLegalEnvelope",
        ExpressFlatRatePaddedEnvelope => "ExpressFlatRatePaddedEnvelope",
    }
}

wire_enum! {
    MailClassKey, "mail class" {
        PriorityExpress => "PriorityExpress",
        First => "First",
        ParcelSelect => "ParcelSelect",
        Priority => "Priority",
        GroundAdvantage => "GroundAdvantage",
        MediaMail => "MediaMail",
        FirstClassPackageInternationalService => "FirstClassPackageInternationalService",
        PriorityMailInternational => "PriorityMailInternational",
        PriorityMailExpressInternational => "PriorityMailExpressInternational",
    }
}

wire_enum! {
    /// Carrier selector for callers; `Carrier::carrier_key` in a quote stays a plain string.
    CarrierKey, "carrier" {
        Usps => "usps",
        Ups => "ups",
    }
}

impl PackageType {
    /// Carrier-sized containers whose outer dimensions are fixed.
    pub fn is_flat_rate(&self) -> bool {
        !matches!(
            self,
            PackageType::SoftEnvelope | PackageType::Parcel | PackageType::Irregular
        )
    }
}

/// The three declared package dimensions, with their minimums in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    X,
    Y,
    Z,
}

impl DimensionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionField::X => "dimensionX",
            DimensionField::Y => "dimensionY",
            DimensionField::Z => "dimensionZ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DimensionField::X => "length",
            DimensionField::Y => "width",
            DimensionField::Z => "height",
        }
    }

    pub fn minimum(&self) -> f64 {
        match self {
            DimensionField::X => 6.0,
            DimensionField::Y => 3.0,
            DimensionField::Z => 0.25,
        }
    }
}

/// Input to a rate lookup. `None` fields are never sent to the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOptions {
    /// Zip code of the origin.
    pub origin_zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_city: Option<String>,
    /// State code of the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_region_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_residential: Option<bool>,
    /// Only required for US shipping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_zip: Option<String>,
    /// ISO 3166-1 alpha-2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_country_code: Option<String>,
    pub mail_class_keys: Vec<MailClassKey>,
    pub package_type_keys: Vec<PackageType>,
    /// Ounces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Length in inches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_x: Option<f64>,
    /// Width in inches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_y: Option<f64>,
    /// Height in inches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_z: Option<f64>,
    #[serde(
        rename = "showUpsRatesWhen2x7Selected",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub show_ups_rates_when_2x7_selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_types: Option<Vec<String>>,
}

impl ShippingOptions {
    pub fn new(
        origin_zip: impl Into<String>,
        mail_class_keys: Vec<MailClassKey>,
        package_type_keys: Vec<PackageType>,
    ) -> Self {
        Self {
            origin_zip: origin_zip.into(),
            origin_city: None,
            origin_region_code: None,
            is_residential: None,
            destination_zip: None,
            destination_country_code: None,
            mail_class_keys,
            package_type_keys,
            weight: None,
            dimension_x: None,
            dimension_y: None,
            dimension_z: None,
            show_ups_rates_when_2x7_selected: None,
            pricing_types: None,
        }
    }

    pub fn dimension(&self, field: DimensionField) -> Option<f64> {
        match field {
            DimensionField::X => self.dimension_x,
            DimensionField::Y => self.dimension_y,
            DimensionField::Z => self.dimension_z,
        }
    }
}

/// One priced quote as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub title: String,
    pub delivery_description: String,
    pub tracking_description: String,
    pub service_description: String,
    pub pricing_description: String,
    pub cubic_tier: Option<String>,
    /// Passed through as sent; UPS quotes carry keys outside [`MailClassKey`].
    pub mail_class_key: String,
    pub mail_class: MailClass,
    pub package_type_key: String,
    pub zone: String,
    pub surcharges: Vec<Surcharge>,
    pub carrier: Carrier,
    pub total_price: f64,
    pub price_base_type_key: String,
    pub base_price: f64,
    pub crossed_total_price: f64,
    pub pricing_type: String,
    pub pricing_sub_type: String,
    pub rate_period_id: i64,
    pub learn_more_url: String,
    pub cheapest: bool,
    pub fastest: bool,
    #[serde(rename = "__typename")]
    pub typename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub carrier_key: String,
    pub title: String,
    #[serde(rename = "__typename")]
    pub typename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailClass {
    pub accuracy: Option<String>,
    pub international: bool,
    #[serde(rename = "__typename")]
    pub typename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub title: String,
    pub price: f64,
    #[serde(rename = "__typename")]
    pub typename: String,
}

/// Top-level GraphQL response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesEnvelope {
    #[serde(default)]
    pub errors: Option<Vec<RateError>>,
    #[serde(default)]
    pub data: Option<RatesData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesData {
    pub rates: Vec<Rate>,
}

/// GraphQL error entry. Only `message` is ever interpreted; `path` segments
/// may be field names or list indices and `extensions` is kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub path: Vec<Value>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}
