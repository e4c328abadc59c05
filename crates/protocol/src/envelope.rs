//! Structured JSON error body returned by the server on failed requests.

use serde::{Deserialize, Serialize};

/// `__type` URN of a missing-property error.
pub const MISSING_PROPERTY_TYPE: &str = "urn:inin.com:common:missingPropertyError";

/// `__type` URN used when the server body could not be interpreted.
pub const UNKNOWN_ERROR_TYPE: &str = "urn:inin.com:common:unknownError";

/// `errorId` of an invalid property inside a request representation.
pub const INVALID_PROPERTY_ID: &str = "error.request.invalidRepresentation.invalidProperty";

/// `errorId` reported when a session's credentials no longer authenticate.
pub const AUTHENTICATION_FAILURE_ID: &str = "error.request.connection.authenticationFailure";

/// `errorId` of a server that is up but refusing new connections.
pub const NOT_ACCEPTING_CONNECTIONS_ID: &str = "error.server.notAcceptingConnections";

/// `errorId` of a server that is unavailable.
pub const SERVER_UNAVAILABLE_ID: &str = "error.server.unavailable";

/// `errorId` synthesized for unparsable or empty error bodies.
pub const UNKNOWN_ERROR_ID: &str = "error.request.unknownError";

/// `errorCode` meaning the addressed session does not exist (under 401).
pub const SESSION_NOT_FOUND_CODE: i64 = 2;

/// `errorCode` meaning the session cookie was absent from the request (under 401).
pub const MISSING_COOKIE_CODE: i64 = 4;

/// `errorCode` paired with [`AUTHENTICATION_FAILURE_ID`] when the session is gone.
pub const AUTHENTICATION_FAILURE_CODE: i64 = -2147221499;

/// Server error envelope: a type URN, a dotted machine-readable `errorId`,
/// an `errorCode` whose semantics depend on the id, and human-readable text.
///
/// `alternate_host_list` is only present on overload/unavailable errors and
/// `property_name` only on missing-property errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
	#[serde(rename = "__type", default, skip_serializing_if = "Option::is_none")]
	pub error_type: Option<String>,
	#[serde(rename = "errorId", default, skip_serializing_if = "Option::is_none")]
	pub error_id: Option<String>,
	#[serde(rename = "errorCode", default, skip_serializing_if = "Option::is_none")]
	pub error_code: Option<i64>,
	#[serde(default)]
	pub message: String,
	#[serde(rename = "alternateHostList", default, skip_serializing_if = "Option::is_none")]
	pub alternate_host_list: Option<Vec<String>>,
	#[serde(rename = "propertyName", default, skip_serializing_if = "Option::is_none")]
	pub property_name: Option<String>,
}

impl ErrorEnvelope {
	/// Fallback envelope for responses whose body was empty or not JSON.
	pub fn unknown(message: impl Into<String>) -> Self {
		Self {
			error_type: Some(UNKNOWN_ERROR_TYPE.to_string()),
			error_id: Some(UNKNOWN_ERROR_ID.to_string()),
			error_code: Some(-1),
			message: message.into(),
			alternate_host_list: None,
			property_name: None,
		}
	}
}

impl std::fmt::Display for ErrorEnvelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let id = self.error_id.as_deref().unwrap_or(UNKNOWN_ERROR_ID);
		match self.error_code {
			Some(code) => write!(f, "{} ({}): {}", id, code, self.message),
			None => write!(f, "{}: {}", id, self.message),
		}
	}
}
