use crate::core::request::{RatesRequest, OPERATION_NAME};
use crate::core::validator::validate_dimensions;
use crate::domain::model::{Rate, RatesEnvelope, ShippingOptions};
use crate::domain::ports::RatesProvider;
use crate::utils::error::{RatesError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://ship.pirateship.com/api/graphql?opname=RatesQuery";

/// Issues one rates query per call. Holds no state between calls and keeps
/// no idle connections, so independent lookups never share anything.
///
/// There is no timeout or retry. Dropping the future returned by
/// [`RatesClient::fetch_rates`] cancels the request.
#[derive(Debug, Clone)]
pub struct RatesClient {
    endpoint: Url,
    client: Client,
}

impl RatesClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Targets another GraphQL URL. `opname=RatesQuery` is appended when the
    /// query string does not already name the operation.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let mut endpoint = Url::parse(endpoint).map_err(|e| RatesError::InvalidConfigValue {
            field: "endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if !endpoint.query_pairs().any(|(key, _)| key == "opname") {
            endpoint.query_pairs_mut().append_pair("opname", OPERATION_NAME);
        }

        let client = Client::builder().pool_max_idle_per_host(0).build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn fetch_rates(&self, options: &ShippingOptions) -> Result<Vec<Rate>> {
        validate_dimensions(options)?;

        let request = RatesRequest::new(options)?;

        tracing::debug!(
            "POST {} ({} variables)",
            self.endpoint,
            request.variables.len()
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Rates response status: {}", status);

        if !status.is_success() {
            return Err(RatesError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: RatesEnvelope = serde_json::from_slice(&body)?;
        let rates = envelope.into_rates()?;

        tracing::debug!("Received {} rate(s)", rates.len());
        Ok(rates)
    }
}

#[async_trait::async_trait]
impl RatesProvider for RatesClient {
    async fn fetch_rates(&self, options: &ShippingOptions) -> Result<Vec<Rate>> {
        RatesClient::fetch_rates(self, options).await
    }
}

/// One-shot lookup against the default endpoint with a fresh client.
pub async fn fetch_shipping_rates(options: &ShippingOptions) -> Result<Vec<Rate>> {
    RatesClient::new()?.fetch_rates(options).await
}
