//! LiFi aggregator client
//!
//! Talks to a LiFi-style cross-chain quote API. One long-lived HTTP client
//! per aggregator endpoint; connection reuse comes from reqwest's pool.

use async_trait::async_trait;
use bridge_types::{AdapterError, AdapterResult, Quote, QuoteApi, QuoteRequest, QuotesResponse};
use reqwest::{
	header::{HeaderMap, HeaderValue},
	Client,
};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the LiFi cross-chain quote aggregator
#[derive(Debug)]
pub struct LifiClient {
	endpoint: String,
	timeout_ms: u64,
	client: Client,
}

impl LifiClient {
	/// Create a new client against the given endpoint
	pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> AdapterResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("Bridge-Router/1.0"));

		let client = Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(timeout_ms))
			.build()
			.map_err(AdapterError::HttpError)?;

		Ok(Self {
			endpoint: endpoint.into().trim_end_matches('/').to_string(),
			timeout_ms,
			client,
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.endpoint, path)
	}
}

#[async_trait]
impl QuoteApi for LifiClient {
	async fn fetch_quotes(&self, request: &QuoteRequest) -> AdapterResult<Vec<Quote>> {
		request
			.validate()
			.map_err(|reason| AdapterError::InvalidRequest { reason })?;

		debug!(
			"fetching aggregator quotes for {} -> {} amount {}",
			request.from_chain_id, request.to_chain_id, request.from_amount
		);

		let send = self.client.post(self.url("quotes")).json(request).send();
		let response = tokio::time::timeout(Duration::from_millis(self.timeout_ms), send)
			.await
			.map_err(|_| AdapterError::Timeout {
				timeout_ms: self.timeout_ms,
			})?
			.map_err(AdapterError::HttpError)?;

		let status = response.status();
		if !status.is_success() {
			warn!("aggregator returned HTTP {}", status.as_u16());
			return Err(AdapterError::from_http_failure(status.as_u16()));
		}

		let body: QuotesResponse =
			response
				.json()
				.await
				.map_err(|e| AdapterError::InvalidResponse {
					reason: e.to_string(),
				})?;

		debug!("aggregator returned {} quote(s)", body.routes.len());
		Ok(body.routes)
	}

	async fn health_check(&self) -> AdapterResult<bool> {
		let response = self
			.client
			.get(self.url("status"))
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		Ok(response.status().is_success())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_construction_normalizes_endpoint() {
		let client = LifiClient::new("https://li.quest/v1/", 5_000).unwrap();
		assert_eq!(client.endpoint(), "https://li.quest/v1");
		assert_eq!(client.url("quotes"), "https://li.quest/v1/quotes");
	}

	#[tokio::test]
	async fn test_fetch_rejects_invalid_request_before_the_wire() {
		let client = LifiClient::new("https://li.quest/v1", 5_000).unwrap();

		let request = QuoteRequest {
			from_chain_id: 1,
			to_chain_id: 1,
			from_token: "0x0000000000000000000000000000000000000000".to_string(),
			to_token: "0x0000000000000000000000000000000000000000".to_string(),
			from_amount: "1000".into(),
			from_address: None,
			to_address: None,
			deny_bridges: Vec::new(),
			deny_exchanges: Vec::new(),
			slippage: 0.005,
		};

		let result = client.fetch_quotes(&request).await;
		assert!(matches!(result, Err(AdapterError::InvalidRequest { .. })));
	}
}
