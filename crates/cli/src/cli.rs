use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "icws", version, about = "Session lifecycle client for ICWS servers")]
pub struct Cli {
    /// Raise log verbosity to debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the session file path
    #[arg(long, global = true, value_name = "FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an authenticated session and store its handle
    Connect(ConnectArgs),
    /// Destroy the stored session
    Disconnect,
    /// Show the stored session without touching the network
    Status,
}

#[derive(Args)]
pub struct ConnectArgs {
    /// Server hostname
    #[arg(long)]
    pub server: String,

    /// Connection scheme: http or https
    #[arg(long, default_value = "https")]
    pub protocol: String,

    /// Explicit port; defaults to 8018 for http and 8019 for https
    #[arg(long)]
    pub port: Option<u16>,

    /// Application name associated with the session
    #[arg(long)]
    pub application_name: String,

    /// User ID to log in with
    #[arg(long)]
    pub user: String,

    /// Password; read from $ICWS_PASSWORD when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// Marketplace application license name
    #[arg(long)]
    pub license: Option<String>,

    /// Marketplace application code
    #[arg(long)]
    pub app_code: Option<String>,

    /// Language negotiated with the server
    #[arg(long, default_value = "en-US")]
    pub language: String,
}
