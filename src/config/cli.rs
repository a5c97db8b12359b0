use crate::config::LookupConfig;
use crate::domain::model::{MailClassKey, PackageType, ShippingOptions};
use crate::utils::error::{RatesError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "ship-rates")]
#[command(about = "Look up shipping rate quotes for a package")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with an optional endpoint and an [options] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "GraphQL endpoint (defaults to the public rates endpoint)")]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub origin_zip: Option<String>,

    #[arg(long)]
    pub origin_city: Option<String>,

    #[arg(long)]
    pub origin_region_code: Option<String>,

    #[arg(long)]
    pub residential: Option<bool>,

    #[arg(long)]
    pub destination_zip: Option<String>,

    #[arg(long, help = "ISO 3166-1 alpha-2 country code")]
    pub destination_country_code: Option<String>,

    #[arg(long = "mail-class", value_delimiter = ',')]
    pub mail_classes: Vec<MailClassKey>,

    #[arg(long = "package-type", value_delimiter = ',')]
    pub package_types: Vec<PackageType>,

    #[arg(long, help = "Weight in ounces")]
    pub weight: Option<f64>,

    #[arg(long, help = "Length in inches")]
    pub dimension_x: Option<f64>,

    #[arg(long, help = "Width in inches")]
    pub dimension_y: Option<f64>,

    #[arg(long, help = "Height in inches")]
    pub dimension_z: Option<f64>,

    #[arg(long = "show-ups-rates-when-2x7-selected")]
    pub show_ups_rates_when_2x7_selected: Option<bool>,

    #[arg(long = "pricing-type", value_delimiter = ',')]
    pub pricing_types: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_log: bool,
}

impl CliConfig {
    /// 合併設定檔與命令列參數；命令列優先
    pub fn resolve(&self) -> Result<LookupConfig> {
        let mut config = match (&self.config, &self.origin_zip) {
            (Some(path), _) => LookupConfig::from_file(path)?,
            (None, Some(origin_zip)) => {
                LookupConfig::new(ShippingOptions::new(origin_zip.clone(), vec![], vec![]))
            }
            (None, None) => {
                return Err(RatesError::Config {
                    message: "either --config or --origin-zip is required".to_string(),
                })
            }
        };

        if self.endpoint.is_some() {
            config.endpoint = self.endpoint.clone();
        }

        let options = &mut config.options;
        if let Some(origin_zip) = &self.origin_zip {
            options.origin_zip = origin_zip.clone();
        }
        overlay(&mut options.origin_city, &self.origin_city);
        overlay(&mut options.origin_region_code, &self.origin_region_code);
        overlay(&mut options.is_residential, &self.residential);
        overlay(&mut options.destination_zip, &self.destination_zip);
        overlay(&mut options.destination_country_code, &self.destination_country_code);
        overlay(&mut options.weight, &self.weight);
        overlay(&mut options.dimension_x, &self.dimension_x);
        overlay(&mut options.dimension_y, &self.dimension_y);
        overlay(&mut options.dimension_z, &self.dimension_z);
        overlay(
            &mut options.show_ups_rates_when_2x7_selected,
            &self.show_ups_rates_when_2x7_selected,
        );

        if !self.mail_classes.is_empty() {
            options.mail_class_keys = self.mail_classes.clone();
        }
        if !self.package_types.is_empty() {
            options.package_type_keys = self.package_types.clone();
        }
        if !self.pricing_types.is_empty() {
            options.pricing_types = Some(self.pricing_types.clone());
        }

        Ok(config)
    }
}

fn overlay<T: Clone>(target: &mut Option<T>, flag: &Option<T>) {
    if flag.is_some() {
        *target = flag.clone();
    }
}
