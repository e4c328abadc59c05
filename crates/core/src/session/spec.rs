//! Connect request specification and client-side validation.

use std::str::FromStr;

use crate::error::SessionError;

const DEFAULT_LANGUAGE: &str = "en-US";

/// Scheme used to reach the server. The only client-side validation the
/// protocol performs: every other property is server-authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
	Http,
	#[default]
	Https,
}

impl Protocol {
	/// Well-known ICWS port for this scheme.
	pub const fn default_port(&self) -> u16 {
		match self {
			Protocol::Http => 8018,
			Protocol::Https => 8019,
		}
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Protocol::Http => "http",
			Protocol::Https => "https",
		}
	}
}

impl FromStr for Protocol {
	type Err = SessionError;

	/// Accepts `http`/`https` in any casing; anything else is rejected
	/// before a request descriptor is ever built.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"http" => Ok(Protocol::Http),
			"https" => Ok(Protocol::Https),
			_ => Err(SessionError::InvalidProperty {
				name: Some("protocol".to_string()),
				message: "protocol is invalid. Valid values are: http, https".to_string(),
			}),
		}
	}
}

impl std::fmt::Display for Protocol {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Fully resolved input for creating a session.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectSpec {
	protocol: Protocol,
	server: String,
	port: Option<u16>,
	application_name: String,
	user_id: String,
	password: String,
	market_place_application_license_name: Option<String>,
	market_place_application_code: Option<String>,
	language: String,
}

impl ConnectSpec {
	/// Builds a spec from the required inputs; protocol, port, and language
	/// take their documented defaults until overridden.
	pub fn new(
		server: impl Into<String>,
		application_name: impl Into<String>,
		user_id: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self {
			protocol: Protocol::default(),
			server: server.into(),
			port: None,
			application_name: application_name.into(),
			user_id: user_id.into(),
			password: password.into(),
			market_place_application_license_name: None,
			market_place_application_code: None,
			language: DEFAULT_LANGUAGE.to_string(),
		}
	}

	/// Sets the connection scheme.
	pub fn with_protocol(mut self, protocol: Protocol) -> Self {
		self.protocol = protocol;
		self
	}

	/// Sets an explicit port, overriding the scheme default.
	pub fn with_port(mut self, port: u16) -> Self {
		self.port = Some(port);
		self
	}

	/// Sets the marketplace application license name.
	pub fn with_license_name(mut self, license: impl Into<String>) -> Self {
		self.market_place_application_license_name = Some(license.into());
		self
	}

	/// Sets the marketplace application code.
	pub fn with_application_code(mut self, code: impl Into<String>) -> Self {
		self.market_place_application_code = Some(code.into());
		self
	}

	/// Sets the language negotiated with the server.
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();
		self
	}

	pub fn protocol(&self) -> Protocol {
		self.protocol
	}

	pub fn server(&self) -> &str {
		&self.server
	}

	/// Explicit port when set, otherwise the scheme default.
	pub fn port(&self) -> u16 {
		self.port.unwrap_or_else(|| self.protocol.default_port())
	}

	pub fn application_name(&self) -> &str {
		&self.application_name
	}

	pub fn user_id(&self) -> &str {
		&self.user_id
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	pub fn license_name(&self) -> Option<&str> {
		self.market_place_application_license_name.as_deref()
	}

	pub fn application_code(&self) -> Option<&str> {
		self.market_place_application_code.as_deref()
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	/// Base endpoint shared by both operations and echoed into the handle.
	pub fn base_url(&self) -> String {
		format!("{}://{}:{}/icws", self.protocol, self.server, self.port())
	}
}

impl std::fmt::Debug for ConnectSpec {
	// The password must never reach logs or panic output.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConnectSpec")
			.field("protocol", &self.protocol)
			.field("server", &self.server)
			.field("port", &self.port())
			.field("application_name", &self.application_name)
			.field("user_id", &self.user_id)
			.field("password", &"<redacted>")
			.field("license_name", &self.market_place_application_license_name)
			.field("application_code", &self.market_place_application_code)
			.field("language", &self.language)
			.finish()
	}
}
