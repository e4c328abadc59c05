//! Command dispatch for the `icws` binary.

pub mod connect;
pub mod disconnect;
pub mod status;

use anyhow::Result;

use crate::cli::Commands;
use crate::store::SessionStore;

pub async fn dispatch(command: Commands, store: &SessionStore) -> Result<()> {
    match command {
        Commands::Connect(args) => connect::run(args, store).await,
        Commands::Disconnect => disconnect::run(store).await,
        Commands::Status => status::run(store),
    }
}

/// Prints a JSON payload on stdout; logs stay on stderr.
pub(crate) fn print_payload(payload: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
