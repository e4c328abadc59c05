//! HTTP transport seam between request descriptors and classification.
//!
//! The core never talks to the network directly: operations build a
//! [`RequestDescriptor`], hand it to a [`Transport`] exactly once, and
//! classify the resulting [`TransportResponse`]. [`HttpTransport`] is the
//! reqwest-backed production implementation; tests substitute scripted fakes.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, SessionError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP method of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Post,
	Delete,
}

impl Method {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Method::Post => "POST",
			Method::Delete => "DELETE",
		}
	}
}

impl std::fmt::Display for Method {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Fully assembled outgoing request: pure data, buildable and assertable
/// without any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
	pub method: Method,
	pub url: String,
	/// Header pairs in send order.
	pub headers: Vec<(String, String)>,
	/// JSON body, absent for bodyless requests.
	pub body: Option<serde_json::Value>,
}

/// Terminal result of one HTTP exchange, as seen by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	/// Response header pairs in wire order; names repeat for multi-value headers.
	pub headers: Vec<(String, String)>,
	pub body: String,
}

impl TransportResponse {
	/// Whether the status falls in the success range `[200, 300)`.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Values of every header named `name`, compared case-insensitively.
	pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
		self.headers
			.iter()
			.filter(move |(header, _)| header.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Sends one request and returns the terminal response.
///
/// Implementations do not retry, follow alternate hosts, or interpret the
/// response; network-level failures surface as [`SessionError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse>;
}

/// Production transport backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
}

impl HttpTransport {
	/// Builds a transport with the default request timeout.
	pub fn new() -> Result<Self> {
		let client = reqwest::Client::builder()
			.timeout(DEFAULT_TIMEOUT)
			.build()
			.map_err(|e| SessionError::Transport(format!("failed to build HTTP client: {e}")))?;
		Ok(Self { client })
	}

	/// Wraps an existing client, keeping its timeout and TLS configuration.
	pub fn from_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse> {
		let mut builder = match request.method {
			Method::Post => self.client.post(&request.url),
			Method::Delete => self.client.delete(&request.url),
		};
		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		let response = builder.send().await.map_err(|e| SessionError::Transport(e.to_string()))?;
		let status = response.status().as_u16();
		let headers = response
			.headers()
			.iter()
			.map(|(name, value)| (name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned()))
			.collect();
		let body = response
			.text()
			.await
			.map_err(|e| SessionError::Transport(format!("failed to read response body: {e}")))?;

		Ok(TransportResponse { status, headers, body })
	}
}
