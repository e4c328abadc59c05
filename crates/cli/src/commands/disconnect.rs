//! Destroy the stored session.

use anyhow::{Result, bail};
use icws::{HttpTransport, SessionError, SessionManager};
use serde_json::json;

use super::print_payload;
use crate::store::SessionStore;

pub async fn run(store: &SessionStore) -> Result<()> {
    let Some(session) = store.load()? else {
        bail!("no stored session; run `icws connect` first");
    };

    let manager = SessionManager::new(HttpTransport::new()?);
    match manager.disconnect(&session).await {
        Ok(()) => {
            store.clear()?;
            print_payload(&json!({
                "disconnected": true,
                "session": session.id,
            }))
        }
        Err(err) => {
            // The server no longer knows this session; the stored handle is
            // dead weight either way.
            if matches!(err, SessionError::SessionNotFound { .. } | SessionError::MissingCookie { .. }) {
                store.clear()?;
            }
            print_payload(&json!({
                "disconnected": false,
                "session": session.id,
                "outcome": err.kind(),
                "message": err.to_string(),
                "alternate_hosts": err.alternate_hosts(),
            }))?;
            Err(err.into())
        }
    }
}
