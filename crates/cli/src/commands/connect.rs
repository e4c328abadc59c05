//! Create a session against an Interaction Center server.

use anyhow::{Context, Result};
use icws::{ConnectSpec, HttpTransport, Protocol, SessionManager};
use serde_json::json;

use super::print_payload;
use crate::cli::ConnectArgs;
use crate::store::SessionStore;

pub async fn run(args: ConnectArgs, store: &SessionStore) -> Result<()> {
    let protocol: Protocol = args.protocol.parse()?;
    let password = match args.password {
        Some(password) => password,
        None => std::env::var("ICWS_PASSWORD").context("no --password given and ICWS_PASSWORD is unset")?,
    };

    let mut spec = ConnectSpec::new(args.server, args.application_name, args.user, password)
        .with_protocol(protocol)
        .with_language(args.language);
    if let Some(port) = args.port {
        spec = spec.with_port(port);
    }
    if let Some(license) = args.license {
        spec = spec.with_license_name(license);
    }
    if let Some(code) = args.app_code {
        spec = spec.with_application_code(code);
    }

    let manager = SessionManager::new(HttpTransport::new()?);
    match manager.connect(&spec).await {
        Ok(session) => {
            store.save(&session)?;
            print_payload(&json!({
                "connected": true,
                "session": session.id,
                "server": session.ic_server,
                "user": session.user.display,
                "session_file": store.path().display().to_string(),
            }))
        }
        Err(err) => {
            print_payload(&json!({
                "connected": false,
                "outcome": err.kind(),
                "message": err.to_string(),
                "alternate_hosts": err.alternate_hosts(),
            }))?;
            Err(err.into())
        }
    }
}
