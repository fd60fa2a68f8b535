// src/alphavantage/client.rs
use crate::alphavantage::models::FunctionType;
use crate::utils::error::FetchError;
use serde_json::Value;
use std::time::Duration;

/// Production endpoint for all five report types.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

// Provider requests hang occasionally under load; cap them hard.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the data client. Built once at startup from
/// explicit values and passed down; the client itself never reads the
/// environment. `base_url` is overridable so tests can point at a local
/// mock server.
#[derive(Debug, Clone)]
pub struct AlphaVantageConfig {
    pub api_key: String,
    pub base_url: String,
}

impl AlphaVantageConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Thin client over the Alpha Vantage query endpoint.
///
/// Stateless beyond the credential: no caching, no retries, one blocking
/// HTTP GET per logical query. A fresh instance is built per analyst
/// invocation and discarded afterwards.
pub struct AlphaVantageClient {
    http: reqwest::Client,
    config: AlphaVantageConfig,
}

impl AlphaVantageClient {
    pub fn new(config: AlphaVantageConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, config })
    }

    /// Issues one GET for the given report type and decodes the JSON body.
    ///
    /// Any non-2xx status or transport failure is fatal to the caller; there
    /// is no partial-result path. The payload shape is provider-defined and
    /// returned as-is.
    pub async fn query(&self, function: FunctionType, symbol: &str) -> Result<Value, FetchError> {
        let url = format!(
            "{}?function={}&symbol={}&apikey={}",
            self.config.base_url, function, symbol, self.config.api_key
        );

        // Log the query, not the URL: the URL carries the credential.
        tracing::debug!("Fetching {} for symbol {}", function, symbol);

        let response = self.http.get(&url).send().await?; // Propagates reqwest::Error as FetchError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for function: {}", status, function);
            return Err(FetchError::Http {
                status,
                function: function.as_query_value(),
            });
        }

        let payload: Value = response.json().await?;
        tracing::debug!("Decoded {} payload for {}", function, symbol);

        Ok(payload)
    }

    pub async fn income_statement(&self, symbol: &str) -> Result<Value, FetchError> {
        self.query(FunctionType::IncomeStatement, symbol).await
    }

    pub async fn balance_sheet(&self, symbol: &str) -> Result<Value, FetchError> {
        self.query(FunctionType::BalanceSheet, symbol).await
    }

    pub async fn cash_flow(&self, symbol: &str) -> Result<Value, FetchError> {
        self.query(FunctionType::CashFlow, symbol).await
    }

    pub async fn insider_transactions(&self, symbol: &str) -> Result<Value, FetchError> {
        self.query(FunctionType::InsiderTransactions, symbol).await
    }

    pub async fn insider_sentiment(&self, symbol: &str) -> Result<Value, FetchError> {
        self.query(FunctionType::InsiderSentiment, symbol).await
    }
}
