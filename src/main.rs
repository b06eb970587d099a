mod api;
mod comment;
mod config;
mod ddns;
mod error;
mod reconcile;
mod record;
mod resolver;

#[cfg(test)]
mod tests;

use clap::Parser;
use ddns::Route53Ddns;
use env_logger::{Env, Target};
use log::error;
use std::{path::PathBuf, process::ExitCode};

/// Points a Route53 address record at this machine's public IP, once.
#[derive(Parser, Debug)]
#[command(name = "route53-ddns", version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Decide whether an update is needed without submitting it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Quiet unless something goes wrong; RUST_LOG=info shows updates
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stdout)
        .init();

    let result = match Route53Ddns::new(&args.config).await {
        Ok(ddns) => ddns.dry_run(args.dry_run).run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
