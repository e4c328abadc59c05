//! Response classification for connect and disconnect exchanges.
//!
//! The server conflates well-formed business errors and malformed or
//! unexpected errors within the same status codes, so classification is
//! layered: the status code selects a bucket, envelope fields disambiguate
//! within it, and unrecognized combinations degrade to
//! [`SessionError::Protocol`] instead of failing the caller. The envelope is
//! parsed once, then dispatched.

use icws_protocol::{
	AUTHENTICATION_FAILURE_CODE, AUTHENTICATION_FAILURE_ID, ConnectionResponse, ErrorEnvelope, INVALID_PROPERTY_ID,
	MISSING_COOKIE_CODE, MISSING_PROPERTY_TYPE, NOT_ACCEPTING_CONNECTIONS_ID, SERVER_UNAVAILABLE_ID,
	SESSION_COOKIE_PREFIX, SESSION_NOT_FOUND_CODE,
};

use super::outcome::{SessionHandle, SessionUser};
use super::spec::ConnectSpec;
use crate::error::{Result, SessionError};
use crate::transport::TransportResponse;

const SET_COOKIE: &str = "Set-Cookie";
const MISSING_COOKIE_MESSAGE: &str = "Missing ICWS Cookie in response";
const SESSION_NOT_FOUND_MESSAGE: &str = "The session was not found";

/// Operation whose exchange is being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Connect,
	Disconnect,
}

impl Operation {
	/// Resource name used in deprecation outcomes and log fields.
	pub const fn resource(&self) -> &'static str {
		match self {
			Operation::Connect => "connect",
			Operation::Disconnect => "disconnect",
		}
	}
}

impl std::fmt::Display for Operation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.resource())
	}
}

/// Classifies a completed connect exchange.
///
/// A 2xx status alone is not sufficient: the response must also carry the
/// `icws_` session cookie and a complete connection body, otherwise the
/// outcome degrades to [`SessionError::Transport`]. On success the assembled
/// handle echoes the spec's base URL and language.
pub fn classify_connect(spec: &ConnectSpec, response: &TransportResponse) -> Result<SessionHandle> {
	if !response.is_success() {
		return Err(classify_failure(Operation::Connect, None, response.status, &response.body));
	}

	let cookie = session_cookie(response).ok_or_else(|| SessionError::Transport(MISSING_COOKIE_MESSAGE.to_string()))?;
	let body: ConnectionResponse = serde_json::from_str(&response.body)
		.map_err(|e| SessionError::Transport(format!("malformed connection response: {e}")))?;

	Ok(SessionHandle {
		url: spec.base_url(),
		id: body.session_id,
		token: body.csrf_token,
		cookie: cookie.to_string(),
		ic_server: body.ic_server,
		alternate_hosts: body.alternate_host_list,
		user: SessionUser {
			id: body.user_id,
			display: body.user_display_name,
		},
		language: spec.language().to_string(),
	})
}

/// Classifies a completed disconnect exchange.
pub fn classify_disconnect(session: &SessionHandle, response: &TransportResponse) -> Result<()> {
	if response.is_success() {
		return Ok(());
	}
	Err(classify_failure(Operation::Disconnect, Some(&session.id), response.status, &response.body))
}

/// Maps a non-2xx exchange onto the closed error set.
fn classify_failure(operation: Operation, session: Option<&str>, status: u16, raw_body: &str) -> SessionError {
	// A disconnect 404 carries no envelope; classified without a parse attempt.
	if operation == Operation::Disconnect && status == 404 {
		return SessionError::SessionNotFound {
			session: session.unwrap_or_default().to_string(),
			message: SESSION_NOT_FOUND_MESSAGE.to_string(),
		};
	}

	let envelope = parse_envelope(raw_body);
	match status {
		400 => {
			if envelope.error_type.as_deref() == Some(MISSING_PROPERTY_TYPE) {
				SessionError::MissingProperty {
					name: envelope.property_name.unwrap_or_default(),
					message: envelope.message,
				}
			} else if envelope.error_id.as_deref() == Some(INVALID_PROPERTY_ID) {
				SessionError::InvalidProperty {
					name: None,
					message: envelope.message,
				}
			} else {
				SessionError::Protocol(envelope)
			}
		}
		401 if operation == Operation::Disconnect => {
			let session = session.unwrap_or_default().to_string();
			let authentication_failure = envelope.error_id.as_deref() == Some(AUTHENTICATION_FAILURE_ID)
				&& envelope.error_code == Some(AUTHENTICATION_FAILURE_CODE);
			match envelope.error_code {
				Some(SESSION_NOT_FOUND_CODE) => SessionError::SessionNotFound {
					session,
					message: envelope.message,
				},
				Some(MISSING_COOKIE_CODE) => SessionError::MissingCookie {
					session,
					message: envelope.message,
				},
				_ if authentication_failure => SessionError::SessionNotFound {
					session,
					message: envelope.message,
				},
				_ => SessionError::Protocol(envelope),
			}
		}
		410 => SessionError::DeprecatedResource {
			name: operation.resource().to_string(),
			message: envelope.message,
		},
		500 => SessionError::Protocol(envelope),
		503 => {
			if envelope.error_id.as_deref() == Some(NOT_ACCEPTING_CONNECTIONS_ID) {
				SessionError::NotAcceptingConnections {
					alternate_hosts: envelope.alternate_host_list.unwrap_or_default(),
					message: envelope.message,
				}
			} else if envelope.error_id.as_deref() == Some(SERVER_UNAVAILABLE_ID) {
				SessionError::ServerUnavailable {
					alternate_hosts: envelope.alternate_host_list.unwrap_or_default(),
					message: envelope.message,
				}
			} else {
				SessionError::Protocol(envelope)
			}
		}
		// The server contract defines no other codes; 401/404 on the connect
		// path land here as well.
		_ => SessionError::Transport(raw_body.to_string()),
	}
}

/// Parses the error envelope, synthesizing the unknown-error fallback for
/// empty or non-JSON bodies so classification can continue.
fn parse_envelope(raw_body: &str) -> ErrorEnvelope {
	if raw_body.trim().is_empty() {
		return ErrorEnvelope::unknown("Unknown error");
	}
	serde_json::from_str(raw_body).unwrap_or_else(|_| ErrorEnvelope::unknown(raw_body))
}

/// First `Set-Cookie` value carrying the ICWS session cookie, if any.
fn session_cookie(response: &TransportResponse) -> Option<&str> {
	response
		.header_values(SET_COOKIE)
		.find(|value| value.starts_with(SESSION_COOKIE_PREFIX))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn spec() -> ConnectSpec {
		ConnectSpec::new("cic.acme.com", "Test App", "operator", "1234")
	}

	fn handle() -> SessionHandle {
		SessionHandle {
			url: "https://cic.acme.com:8019/icws".to_string(),
			id: "1247633034".to_string(),
			token: "token-blob".to_string(),
			cookie: "icws_1247633034=6eabffb3; Path=/icws/1247633034".to_string(),
			ic_server: "cic.acme.com".to_string(),
			alternate_hosts: Vec::new(),
			user: SessionUser {
				id: "operator".to_string(),
				display: "Operator".to_string(),
			},
			language: "en-US".to_string(),
		}
	}

	fn response(status: u16, body: &str) -> TransportResponse {
		TransportResponse {
			status,
			headers: Vec::new(),
			body: body.to_string(),
		}
	}

	fn connect_success_body() -> &'static str {
		r#"{
			"sessionId": "1247633034",
			"csrfToken": "token-blob",
			"icServer": "cic2.acme.com",
			"alternateHostList": ["cic2.acme.com", "cic3.acme.com"],
			"userID": "operator",
			"userDisplayName": "Operator"
		}"#
	}

	fn connect_success_response() -> TransportResponse {
		TransportResponse {
			status: 200,
			headers: vec![
				("Content-Type".to_string(), "application/json".to_string()),
				("Set-Cookie".to_string(), "other=1; Path=/".to_string()),
				("Set-Cookie".to_string(), "icws_123=abc; Path=/icws/123".to_string()),
			],
			body: connect_success_body().to_string(),
		}
	}

	#[test]
	fn connect_success_assembles_full_handle() {
		let session = classify_connect(&spec(), &connect_success_response()).expect("should classify as success");
		assert_eq!(session.url, "https://cic.acme.com:8019/icws");
		assert_eq!(session.id, "1247633034");
		assert_eq!(session.token, "token-blob");
		assert_eq!(session.cookie, "icws_123=abc; Path=/icws/123");
		assert_eq!(session.ic_server, "cic2.acme.com");
		assert_eq!(session.alternate_hosts, vec!["cic2.acme.com", "cic3.acme.com"]);
		assert_eq!(session.user.id, "operator");
		assert_eq!(session.user.display, "Operator");
		assert_eq!(session.language, "en-US");
	}

	#[test]
	fn connect_2xx_without_session_cookie_is_transport_error() {
		let mut response = connect_success_response();
		response.headers.retain(|(_, value)| !value.starts_with("icws_"));
		let err = classify_connect(&spec(), &response).unwrap_err();
		assert_eq!(err, SessionError::Transport("Missing ICWS Cookie in response".to_string()));
	}

	#[test]
	fn connect_2xx_with_malformed_body_is_transport_error() {
		let mut response = connect_success_response();
		response.body = r#"{"sessionId": "1247633034"}"#.to_string();
		match classify_connect(&spec(), &response).unwrap_err() {
			SessionError::Transport(message) => {
				assert!(message.contains("malformed connection response"), "unexpected message: {message}")
			}
			other => panic!("expected transport error, got {other:?}"),
		}
	}

	#[test]
	fn connect_400_missing_property() {
		let body = r#"{"__type":"urn:inin.com:common:missingPropertyError","propertyName":"userID","message":"required"}"#;
		let err = classify_connect(&spec(), &response(400, body)).unwrap_err();
		assert_eq!(
			err,
			SessionError::MissingProperty {
				name: "userID".to_string(),
				message: "required".to_string(),
			}
		);
	}

	#[test]
	fn connect_400_invalid_property() {
		let body = r#"{"errorId":"error.request.invalidRepresentation.invalidProperty","message":"bad value"}"#;
		let err = classify_connect(&spec(), &response(400, body)).unwrap_err();
		assert_eq!(
			err,
			SessionError::InvalidProperty {
				name: None,
				message: "bad value".to_string(),
			}
		);
	}

	#[test]
	fn unrecognized_400_degrades_to_protocol_error() {
		let body = r#"{"errorId":"error.request.somethingElse","errorCode":9,"message":"odd"}"#;
		match classify_connect(&spec(), &response(400, body)).unwrap_err() {
			SessionError::Protocol(envelope) => {
				assert_eq!(envelope.error_id.as_deref(), Some("error.request.somethingElse"));
				assert_eq!(envelope.error_code, Some(9));
			}
			other => panic!("expected protocol error, got {other:?}"),
		}
	}

	#[test]
	fn disconnect_401_code_2_is_session_not_found() {
		let err = classify_disconnect(&handle(), &response(401, r#"{"errorCode":2,"message":"gone"}"#)).unwrap_err();
		assert_eq!(
			err,
			SessionError::SessionNotFound {
				session: "1247633034".to_string(),
				message: "gone".to_string(),
			}
		);
	}

	#[test]
	fn disconnect_401_code_4_is_missing_cookie() {
		let err = classify_disconnect(&handle(), &response(401, r#"{"errorCode":4,"message":"no cookie"}"#)).unwrap_err();
		assert_eq!(
			err,
			SessionError::MissingCookie {
				session: "1247633034".to_string(),
				message: "no cookie".to_string(),
			}
		);
	}

	#[test]
	fn disconnect_401_authentication_failure_pair_is_session_not_found() {
		let body = r#"{"errorId":"error.request.connection.authenticationFailure","errorCode":-2147221499,"message":"expired"}"#;
		let err = classify_disconnect(&handle(), &response(401, body)).unwrap_err();
		assert_eq!(
			err,
			SessionError::SessionNotFound {
				session: "1247633034".to_string(),
				message: "expired".to_string(),
			}
		);
	}

	#[test]
	fn disconnect_401_with_other_code_degrades_to_protocol_error() {
		let body = r#"{"errorId":"error.request.connection.authenticationFailure","errorCode":7,"message":"odd"}"#;
		match classify_disconnect(&handle(), &response(401, body)).unwrap_err() {
			SessionError::Protocol(envelope) => assert_eq!(envelope.error_code, Some(7)),
			other => panic!("expected protocol error, got {other:?}"),
		}
	}

	#[test]
	fn connect_401_lands_in_the_generic_bucket() {
		let body = r#"{"errorCode":2,"message":"gone"}"#;
		let err = classify_connect(&spec(), &response(401, body)).unwrap_err();
		assert_eq!(err, SessionError::Transport(body.to_string()));
	}

	#[test]
	fn disconnect_404_is_session_not_found_without_parsing() {
		for body in ["", "<html>not json</html>"] {
			let err = classify_disconnect(&handle(), &response(404, body)).unwrap_err();
			assert_eq!(
				err,
				SessionError::SessionNotFound {
					session: "1247633034".to_string(),
					message: "The session was not found".to_string(),
				}
			);
		}
	}

	#[test]
	fn connect_404_lands_in_the_generic_bucket() {
		let err = classify_connect(&spec(), &response(404, "")).unwrap_err();
		assert_eq!(err, SessionError::Transport(String::new()));
	}

	#[test]
	fn deprecated_410_names_the_classified_operation() {
		let body = r#"{"message":"use the new endpoint"}"#;
		let disconnect = classify_disconnect(&handle(), &response(410, body)).unwrap_err();
		assert_eq!(
			disconnect,
			SessionError::DeprecatedResource {
				name: "disconnect".to_string(),
				message: "use the new endpoint".to_string(),
			}
		);

		let connect = classify_connect(&spec(), &response(410, body)).unwrap_err();
		assert_eq!(
			connect,
			SessionError::DeprecatedResource {
				name: "connect".to_string(),
				message: "use the new endpoint".to_string(),
			}
		);
	}

	#[test]
	fn internal_error_500_is_protocol_error() {
		let body = r#"{"errorId":"error.server.internal","errorCode":-1,"message":"boom"}"#;
		match classify_connect(&spec(), &response(500, body)).unwrap_err() {
			SessionError::Protocol(envelope) => assert_eq!(envelope.error_id.as_deref(), Some("error.server.internal")),
			other => panic!("expected protocol error, got {other:?}"),
		}
	}

	#[test]
	fn busy_503_surfaces_alternate_hosts() {
		let body = r#"{"errorId":"error.server.notAcceptingConnections","alternateHostList":["h1","h2"],"message":"busy"}"#;
		let err = classify_connect(&spec(), &response(503, body)).unwrap_err();
		assert_eq!(
			err,
			SessionError::NotAcceptingConnections {
				alternate_hosts: vec!["h1".to_string(), "h2".to_string()],
				message: "busy".to_string(),
			}
		);
		assert_eq!(err.alternate_hosts(), Some(["h1".to_string(), "h2".to_string()].as_slice()));
	}

	#[test]
	fn unavailable_503_surfaces_alternate_hosts() {
		let body = r#"{"errorId":"error.server.unavailable","alternateHostList":["h3"],"message":"down"}"#;
		let err = classify_disconnect(&handle(), &response(503, body)).unwrap_err();
		assert_eq!(
			err,
			SessionError::ServerUnavailable {
				alternate_hosts: vec!["h3".to_string()],
				message: "down".to_string(),
			}
		);
	}

	#[test]
	fn overloaded_503_without_host_list_reads_as_empty() {
		let body = r#"{"errorId":"error.server.notAcceptingConnections","message":"busy"}"#;
		let err = classify_connect(&spec(), &response(503, body)).unwrap_err();
		assert_eq!(
			err,
			SessionError::NotAcceptingConnections {
				alternate_hosts: Vec::new(),
				message: "busy".to_string(),
			}
		);
	}

	#[test]
	fn unrecognized_503_degrades_to_protocol_error() {
		let body = r#"{"errorId":"error.server.draining","message":"soon"}"#;
		assert!(matches!(
			classify_connect(&spec(), &response(503, body)).unwrap_err(),
			SessionError::Protocol(_)
		));
	}

	#[test]
	fn undefined_status_is_generic_transport_outcome() {
		let err = classify_connect(&spec(), &response(418, "short and stout")).unwrap_err();
		assert_eq!(err, SessionError::Transport("short and stout".to_string()));
	}

	#[test]
	fn empty_error_body_synthesizes_unknown_envelope() {
		match classify_connect(&spec(), &response(500, "")).unwrap_err() {
			SessionError::Protocol(envelope) => {
				assert_eq!(envelope.error_id.as_deref(), Some("error.request.unknownError"));
				assert_eq!(envelope.error_code, Some(-1));
				assert_eq!(envelope.message, "Unknown error");
			}
			other => panic!("expected protocol error, got {other:?}"),
		}
	}

	#[test]
	fn non_json_error_body_is_carried_into_the_synthesized_envelope() {
		match classify_connect(&spec(), &response(500, "<html>proxy error</html>")).unwrap_err() {
			SessionError::Protocol(envelope) => {
				assert_eq!(envelope.error_id.as_deref(), Some("error.request.unknownError"));
				assert_eq!(envelope.message, "<html>proxy error</html>");
			}
			other => panic!("expected protocol error, got {other:?}"),
		}
	}

	#[test]
	fn disconnect_2xx_is_success() {
		assert_eq!(classify_disconnect(&handle(), &response(200, "")), Ok(()));
		assert_eq!(classify_disconnect(&handle(), &response(204, "")), Ok(()));
	}

	#[test]
	fn classification_is_idempotent() {
		let exchanges = [
			response(400, r#"{"__type":"urn:inin.com:common:missingPropertyError","propertyName":"userID","message":"required"}"#),
			response(503, r#"{"errorId":"error.server.notAcceptingConnections","alternateHostList":["h1"],"message":"busy"}"#),
			response(500, "not json"),
			connect_success_response(),
		];
		for exchange in &exchanges {
			assert_eq!(
				classify_connect(&spec(), exchange),
				classify_connect(&spec(), exchange),
				"classification differed across runs for status {}",
				exchange.status
			);
		}
	}
}
