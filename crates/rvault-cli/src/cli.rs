use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rvault",
    about = "rvault: tamper-evident replicated value store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the replica server
    Serve(ServeArgs),
    /// Print a fresh random secret for SECRET_KEY
    Keygen(KeygenArgs),
    /// Walk through update, corrupt, verify and restore in-process
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub replicas: Option<usize>,
    /// Content every replica starts with
    #[arg(long)]
    pub initial: Option<String>,
    /// Environment variable holding the secret
    #[arg(long)]
    pub secret_env: Option<String>,
}

#[derive(Args)]
pub struct KeygenArgs {
    #[arg(long, default_value = "32")]
    pub bytes: usize,
}

#[derive(Args)]
pub struct DemoArgs {
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..))]
    pub replicas: u32,
}
