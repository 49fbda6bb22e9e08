//! Aggregator client trait and error types

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::quotes::{Quote, QuoteRequest};

/// Result alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors from the aggregator boundary
///
/// These never escape as panics; the store surfaces them as a state field
/// only when no alternate protocol can carry the transfer.
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Invalid request: {reason}")]
	InvalidRequest { reason: String },

	#[error("Connection error: {0}")]
	Connection(String),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl AdapterError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			AdapterError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Create an HTTP failure error from a response status with a default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			404 => "Not Found".to_string(),
			408 => "Request Timeout".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatusError {
			status_code,
			reason,
		}
	}
}

/// Client interface to the external quote aggregator
///
/// Implemented over HTTP in production and by in-memory mocks in tests.
/// The trait is the only asynchronous I/O boundary of the engine.
#[async_trait]
pub trait QuoteApi: Send + Sync + Debug {
	/// Fetch quotes for the given request tuple
	///
	/// An empty list is a valid, successful response.
	async fn fetch_quotes(&self, request: &QuoteRequest) -> AdapterResult<Vec<Quote>>;

	/// Lightweight reachability probe
	async fn health_check(&self) -> AdapterResult<bool> {
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		let error = AdapterError::HttpStatusError {
			status_code: 404,
			reason: "Not Found".to_string(),
		};
		assert_eq!(error.status_code(), Some(404));

		let error = AdapterError::InvalidResponse {
			reason: "bad body".to_string(),
		};
		assert_eq!(error.status_code(), None);
	}

	#[test]
	fn test_http_failure_status_message_mapping() {
		let error = AdapterError::from_http_failure(429);
		assert!(error.to_string().contains("429"));
		assert!(error.to_string().contains("Too Many Requests"));

		let error = AdapterError::from_http_failure(418);
		assert!(error.to_string().contains("HTTP Error 418"));
	}
}
