use crate::domain::model::{Rate, ShippingOptions};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can turn shipping options into a list of quotes.
#[async_trait]
pub trait RatesProvider: Send + Sync {
    async fn fetch_rates(&self, options: &ShippingOptions) -> Result<Vec<Rate>>;
}
