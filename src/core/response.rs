use crate::domain::model::{Rate, RatesEnvelope};
use crate::utils::error::{RatesError, Result, GENERIC_RESPONSE_ERROR, NO_DATA_IN_RESPONSE};

impl RatesEnvelope {
    /// Pulls the rates out of a parsed response body.
    ///
    /// Errors without data fail with the first error's message. Missing data
    /// with no errors fails with a generic message. Data wins when both are
    /// present; the errors are only logged.
    pub fn into_rates(self) -> Result<Vec<Rate>> {
        let errors = self.errors.unwrap_or_default();

        match self.data {
            None => match errors.into_iter().next() {
                Some(first) if !first.message.is_empty() => Err(RatesError::Application {
                    message: first.message,
                }),
                Some(_) => Err(RatesError::application(GENERIC_RESPONSE_ERROR)),
                None => Err(RatesError::application(NO_DATA_IN_RESPONSE)),
            },
            Some(data) => {
                if !errors.is_empty() {
                    tracing::warn!(
                        "Rates response carried {} error(s) alongside data; first: {}",
                        errors.len(),
                        errors[0].message
                    );
                }
                Ok(data.rates)
            }
        }
    }
}
