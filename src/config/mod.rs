#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};

use crate::core::client::DEFAULT_ENDPOINT;
use crate::domain::model::ShippingOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// A resolved lookup: where to send the query and what to ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    pub options: ShippingOptions,
}

impl LookupConfig {
    pub fn new(options: ShippingOptions) -> Self {
        Self {
            endpoint: None,
            options,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", self.endpoint())?;
        validation::validate_non_empty_string("originZip", &self.options.origin_zip)?;
        validation::validate_non_empty_list("mailClassKeys", &self.options.mail_class_keys)?;
        validation::validate_non_empty_list("packageTypeKeys", &self.options.package_type_keys)?;

        tracing::debug!("✅ Lookup configuration validation passed");
        Ok(())
    }
}
