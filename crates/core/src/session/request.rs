//! Request descriptor construction for connect and disconnect.

use icws_protocol::{CONNECTION_REQUEST_TYPE, CSRF_TOKEN_HEADER, ConnectionRequest};

use super::outcome::SessionHandle;
use super::spec::ConnectSpec;
use crate::error::{Result, SessionError};
use crate::transport::{Method, RequestDescriptor};

const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Builds `POST {base}/connection` carrying the authentication body.
pub fn connect_request(spec: &ConnectSpec) -> Result<RequestDescriptor> {
	let body = ConnectionRequest {
		request_type: CONNECTION_REQUEST_TYPE.to_string(),
		application_name: spec.application_name().to_string(),
		user_id: spec.user_id().to_string(),
		password: spec.password().to_string(),
		market_place_application_license_name: spec.license_name().map(str::to_string),
		market_place_application_code: spec.application_code().map(str::to_string),
	};
	let body = serde_json::to_value(&body)
		.map_err(|e| SessionError::Transport(format!("failed to encode connection request: {e}")))?;

	Ok(RequestDescriptor {
		method: Method::Post,
		url: format!("{}/connection", spec.base_url()),
		headers: vec![(ACCEPT_LANGUAGE.to_string(), spec.language().to_string())],
		body: Some(body),
	})
}

/// Builds `DELETE {session.url}/{session.id}/connection` authenticated with
/// the session's CSRF token and cookie.
pub fn disconnect_request(session: &SessionHandle) -> RequestDescriptor {
	RequestDescriptor {
		method: Method::Delete,
		url: format!("{}/{}/connection", session.url, session.id),
		headers: vec![
			(ACCEPT_LANGUAGE.to_string(), session.language.clone()),
			(CSRF_TOKEN_HEADER.to_string(), session.token.clone()),
			("Cookie".to_string(), session.cookie.clone()),
		],
		body: None,
	}
}
