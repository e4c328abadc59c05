use clap::Parser;
use icws_cli::{cli::Cli, commands, logging, store::SessionStore};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let store = match SessionStore::new(cli.session_file) {
        Ok(store) => store,
        Err(err) => {
            error!(target = "icws", error = %err, "failed to resolve session store");
            std::process::exit(1);
        }
    };

    if let Err(err) = commands::dispatch(cli.command, &store).await {
        error!(target = "icws", error = %err, "command failed");
        std::process::exit(1);
    }
}
