//! Session handle produced by a successful connect.

use serde::{Deserialize, Serialize};

/// Identity of the authenticated user, as echoed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
	pub id: String,
	pub display: String,
}

/// Immutable handle to an established server-side session.
///
/// Only a successful connect classification constructs one, and every field
/// is required at that point. Disconnect reads it without consuming it; the
/// handle has no destructor of its own and simply stops authenticating once
/// the server acknowledges disconnect or expires the cookie (the latter shows
/// up as a session-not-found outcome on a later call).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHandle {
	/// Base endpoint the session was created against, e.g. `https://cic.acme.com:8019/icws`.
	pub url: String,
	/// Opaque session identifier.
	pub id: String,
	/// CSRF token required on mutating requests against this session.
	pub token: String,
	/// Raw `Set-Cookie` header value of the `icws_` session cookie.
	pub cookie: String,
	/// Server that actually owns the session.
	pub ic_server: String,
	/// Peer hosts to retry against when this server degrades; may be empty.
	pub alternate_hosts: Vec<String>,
	pub user: SessionUser,
	/// Language negotiated at connect time, reused on later requests.
	pub language: String,
}
