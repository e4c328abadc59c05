//! Error types for session lifecycle operations.
//!
//! [`SessionError`] is the closed, non-success half of the outcome set:
//! server-reported business errors become typed variants, malformed responses
//! and network-level failures degrade to [`SessionError::Transport`], and
//! well-formed but unrecognized server errors land in
//! [`SessionError::Protocol`]. Nothing here is retried; callers own that.

use icws_protocol::ErrorEnvelope;
use thiserror::Error;

/// Crate-wide result alias over [`SessionError`].
pub type Result<T> = std::result::Result<T, SessionError>;

/// One non-success outcome of a connect or disconnect exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
	/// The request lacked a property the server requires.
	#[error("missing property `{name}`: {message}")]
	MissingProperty { name: String, message: String },

	/// A property value was rejected, client-side (`protocol`) or by the server.
	#[error("invalid property{}: {message}", .name.as_deref().map(|n| format!(" `{n}`")).unwrap_or_default())]
	InvalidProperty { name: Option<String>, message: String },

	/// The resource is gone from this server version.
	#[error("deprecated resource `{name}`: {message}")]
	DeprecatedResource { name: String, message: String },

	/// The server is up but refusing new connections; retry against `alternate_hosts`.
	#[error("server not accepting connections: {message}")]
	NotAcceptingConnections { alternate_hosts: Vec<String>, message: String },

	/// The server is unavailable; retry against `alternate_hosts`.
	#[error("server unavailable: {message}")]
	ServerUnavailable { alternate_hosts: Vec<String>, message: String },

	/// The addressed session no longer exists server-side.
	#[error("session `{session}` not found: {message}")]
	SessionNotFound { session: String, message: String },

	/// The session cookie was absent from the request.
	#[error("missing cookie for session `{session}`: {message}")]
	MissingCookie { session: String, message: String },

	/// A well-formed server error outside the recognized vocabulary.
	#[error("protocol error: {0}")]
	Protocol(ErrorEnvelope),

	/// Network-level failure, malformed body, or missing expected cookie.
	#[error("transport error: {0}")]
	Transport(String),
}

impl SessionError {
	/// Stable snake_case label for log sinks and CLI output.
	pub fn kind(&self) -> &'static str {
		match self {
			SessionError::MissingProperty { .. } => "missing_property",
			SessionError::InvalidProperty { .. } => "invalid_property",
			SessionError::DeprecatedResource { .. } => "deprecated_resource",
			SessionError::NotAcceptingConnections { .. } => "not_accepting_connections",
			SessionError::ServerUnavailable { .. } => "server_unavailable",
			SessionError::SessionNotFound { .. } => "session_not_found",
			SessionError::MissingCookie { .. } => "missing_cookie",
			SessionError::Protocol(_) => "protocol_error",
			SessionError::Transport(_) => "transport_error",
		}
	}

	/// Alternate hosts offered by overload/unavailable outcomes.
	pub fn alternate_hosts(&self) -> Option<&[String]> {
		match self {
			SessionError::NotAcceptingConnections { alternate_hosts, .. }
			| SessionError::ServerUnavailable { alternate_hosts, .. } => Some(alternate_hosts),
			_ => None,
		}
	}
}
