//! Request and response bodies for the `/icws/connection` resource.

use serde::{Deserialize, Serialize};

/// Type URN carried in the `__type` tag of a connection request.
pub const CONNECTION_REQUEST_TYPE: &str = "urn:inin.com:connection:icAuthConnectionRequestSettings";

/// Header carrying the anti-forgery token on requests against an established session.
pub const CSRF_TOKEN_HEADER: &str = "ININ-ICWS-CSRF-Token";

/// Prefix of the `Set-Cookie` value that identifies the ICWS session cookie.
pub const SESSION_COOKIE_PREFIX: &str = "icws_";

/// Body of `POST /icws/connection` using IC user authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
	#[serde(rename = "__type")]
	pub request_type: String,
	#[serde(rename = "applicationName")]
	pub application_name: String,
	#[serde(rename = "userID")]
	pub user_id: String,
	pub password: String,
	#[serde(rename = "marketPlaceApplicationLicenseName", skip_serializing_if = "Option::is_none")]
	pub market_place_application_license_name: Option<String>,
	#[serde(rename = "marketPlaceApplicationCode", skip_serializing_if = "Option::is_none")]
	pub market_place_application_code: Option<String>,
}

/// Success body of `POST /icws/connection`.
///
/// `alternate_host_list` is omitted by some server versions and reads as
/// empty; every other field is required for a usable session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResponse {
	#[serde(rename = "sessionId")]
	pub session_id: String,
	#[serde(rename = "csrfToken")]
	pub csrf_token: String,
	#[serde(rename = "icServer")]
	pub ic_server: String,
	#[serde(rename = "alternateHostList", default)]
	pub alternate_host_list: Vec<String>,
	#[serde(rename = "userID")]
	pub user_id: String,
	#[serde(rename = "userDisplayName")]
	pub user_display_name: String,
}
