use crate::utils::{signature::get_signature, version::get_version};
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::{Parser, Subcommand};
use tokio::io;

mod types;
mod updater;
mod utils;

#[derive(Parser)]
#[command(name = "addonup")]
#[command(author = "Labscend")]
#[command(about = "Keeps a World of Warcraft addon in sync with its remote version feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the remote feed and install the newer build when one exists
    Update {
        /// Path to the updater config. Defaults to ./config.json
        #[arg(short, long)]
        config: Option<String>,

        /// Don't pause for Enter at the end of execution
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Report whether an update is available without downloading anything
    Check {
        /// Path to the updater config. Defaults to ./config.json
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a starter config.json in the current directory
    Init {},
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let mut cmd = Cli::command();
    cmd = cmd.version(version_static).before_help(signature_static);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature_static);
        return Ok(());
    }

    let matches = cmd.get_matches();
    let cli: Cli = Cli::from_arg_matches(&matches).expect("failed to parse cli args");

    match cli.command {
        Commands::Update { config, quiet } => {
            if let Err(e) = updater::run_update(config.as_deref(), quiet).await {
                return Err(io::Error::other(e));
            }

            Ok(())
        }

        Commands::Check { config } => {
            if let Err(e) = updater::run_check(config.as_deref()).await {
                return Err(io::Error::other(e));
            }

            Ok(())
        }

        Commands::Init {} => {
            if let Err(e) = updater::config::write_starter_config() {
                return Err(io::Error::other(e));
            }

            Ok(())
        }
    }
}
