//! Observability hooks for session operations.
//!
//! The classifier stays pure; the [`SessionManager`] notifies an injected
//! [`SessionObserver`] at two defined points - request sent and outcome
//! classified - and nowhere else.
//!
//! [`SessionManager`]: crate::session::SessionManager

use tracing::debug;

use crate::session::Operation;

/// Structured log sink invoked around each connect/disconnect exchange.
pub trait SessionObserver: Send + Sync {
	/// A request descriptor was handed to the transport.
	fn request_sent(&self, operation: Operation, url: &str);

	/// The exchange was classified; `outcome` is the stable kind label
	/// (`success` or a [`SessionError::kind`] value).
	///
	/// [`SessionError::kind`]: crate::error::SessionError::kind
	fn outcome_classified(&self, operation: Operation, outcome: &str);
}

/// Default observer logging under the `icws.session` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
	fn request_sent(&self, operation: Operation, url: &str) {
		debug!(target = "icws.session", %operation, %url, "request sent");
	}

	fn outcome_classified(&self, operation: Operation, outcome: &str) {
		debug!(target = "icws.session", %operation, outcome, "outcome classified");
	}
}

/// Observer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
	fn request_sent(&self, _operation: Operation, _url: &str) {}

	fn outcome_classified(&self, _operation: Operation, _outcome: &str) {}
}
