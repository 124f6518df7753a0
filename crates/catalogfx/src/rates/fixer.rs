use async_trait::async_trait;
use reqwest::Client;

use catalogfx_core::rates::{
    parse_rates_response, parse_symbols_response, RateError, RateSource, RateTable, Result,
    SymbolTable,
};

use crate::config::Config;

/// Fixer.io rate source.
///
/// Each endpoint URL is used as a prefix and the access key is appended to
/// it, so the configured URLs end in `access_key=`.
pub struct FixerClient {
    client: Client,
    api_key: String,
    rates_url: String,
    symbols_url: String,
}

impl FixerClient {
    pub fn new(
        api_key: impl Into<String>,
        rates_url: impl Into<String>,
        symbols_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            rates_url: rates_url.into(),
            symbols_url: symbols_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.fixer_api_key.clone(),
            config.fixer_rates_url.clone(),
            config.fixer_symbols_url.clone(),
        )
    }

    /// Fetches the raw body of an endpoint, requiring a 2xx status.
    async fn fetch(&self, url_prefix: &str, resource: &'static str) -> Result<Vec<u8>> {
        tracing::info!(resource, "Requesting from rate source");

        let url = format!("{}{}", url_prefix, self.api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RateError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(resource, %status, "Rate source returned an error status");
            return Err(RateError::Transport(format!(
                "{resource} request returned HTTP {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RateError::Transport(e.without_url().to_string()))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RateSource for FixerClient {
    async fn fetch_rates(&self) -> Result<RateTable> {
        let body = self.fetch(&self.rates_url, "rates").await?;
        let rates = parse_rates_response(&body).inspect_err(|err| {
            tracing::warn!(error = %err, "Rate source did not return rates");
        })?;
        tracing::info!(count = rates.len(), "Fetched rates");
        Ok(rates)
    }

    async fn fetch_symbols(&self) -> Result<SymbolTable> {
        let body = self.fetch(&self.symbols_url, "symbols").await?;
        let symbols = parse_symbols_response(&body).inspect_err(|err| {
            tracing::warn!(error = %err, "Rate source did not return symbols");
        })?;
        tracing::info!(count = symbols.len(), "Fetched symbols");
        Ok(symbols)
    }
}
