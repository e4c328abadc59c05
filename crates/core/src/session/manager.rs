//! Connect/disconnect orchestration over a transport.

use super::classify::{self, Operation};
use super::outcome::SessionHandle;
use super::request;
use super::spec::ConnectSpec;
use crate::error::{Result, SessionError};
use crate::observer::{SessionObserver, TracingObserver};
use crate::transport::Transport;

/// Drives one request/response exchange per operation: build the descriptor,
/// notify the observer, send through the transport, classify the result.
///
/// Managers hold no session state. Each call is independent and classifies
/// deterministically, so one manager may serve many concurrent sessions and
/// disconnecting an already-closed session yields a session-not-found
/// outcome rather than a fault.
pub struct SessionManager<T> {
	transport: T,
	observer: Box<dyn SessionObserver>,
}

impl<T: Transport> SessionManager<T> {
	/// Creates a manager logging through the default tracing observer.
	pub fn new(transport: T) -> Self {
		Self {
			transport,
			observer: Box::new(TracingObserver),
		}
	}

	/// Replaces the observer notified around each exchange.
	pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
		self.observer = Box::new(observer);
		self
	}

	/// Returns the transport this manager sends through.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Establishes an authenticated session and returns its handle.
	pub async fn connect(&self, spec: &ConnectSpec) -> Result<SessionHandle> {
		let request = request::connect_request(spec)?;
		self.observer.request_sent(Operation::Connect, &request.url);
		let outcome = match self.transport.send(&request).await {
			Ok(response) => classify::classify_connect(spec, &response),
			Err(err) => Err(err),
		};
		self.notify(Operation::Connect, outcome.as_ref().err());
		outcome
	}

	/// Tears down an established session.
	pub async fn disconnect(&self, session: &SessionHandle) -> Result<()> {
		let request = request::disconnect_request(session);
		self.observer.request_sent(Operation::Disconnect, &request.url);
		let outcome = match self.transport.send(&request).await {
			Ok(response) => classify::classify_disconnect(session, &response),
			Err(err) => Err(err),
		};
		self.notify(Operation::Disconnect, outcome.as_ref().err());
		outcome
	}

	fn notify(&self, operation: Operation, error: Option<&SessionError>) {
		let outcome = error.map_or("success", SessionError::kind);
		self.observer.outcome_classified(operation, outcome);
	}
}
