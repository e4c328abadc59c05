//! Report the stored session without touching the network.

use anyhow::Result;
use serde_json::json;

use super::print_payload;
use crate::store::SessionStore;

pub fn run(store: &SessionStore) -> Result<()> {
    match store.load()? {
        Some(session) => print_payload(&json!({
            "active": true,
            "session": session.id,
            "url": session.url,
            "server": session.ic_server,
            "user": session.user.display,
            "language": session.language,
            "alternate_hosts": session.alternate_hosts,
            "session_file": store.path().display().to_string(),
        })),
        None => print_payload(&json!({
            "active": false,
            "message": "No stored session; run `icws connect` to create one",
        })),
    }
}
