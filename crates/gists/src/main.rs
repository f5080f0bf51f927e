//! gists - command-line client for GitHub Gists.
//!
//! List, show, download, create, update, delete, fork and star gists.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gists_cmd::factory::Factory;
use gists_core::{ConfigError, ios_eprintln};

/// Process exit codes.
mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const CONFIG: i32 = 2;
}

/// Manage GitHub gists from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "gists",
    version,
    about = "Command-line client for GitHub Gists",
    long_about = "Manage GitHub gists from the command line.\n\n\
        Credentials are read from ~/.gistsrc unless given as arguments."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(flatten)]
    Gist(gists_cmd::gist::GistCommand),
    /// Show version information.
    Version(gists_cmd::version::VersionArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GISTS_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string());

    let exit_code = if let Some(cmd) = cli.command {
        match run_command(cmd, &factory).await {
            Ok(()) => exit_codes::OK,
            Err(e) => {
                if let Some(config_err) = e.downcast_ref::<ConfigError>() {
                    ios_eprintln!(factory.io, "{config_err}");
                    exit_codes::CONFIG
                } else {
                    tracing::error!("{e:#}");
                    exit_codes::ERROR
                }
            }
        }
    } else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        exit_codes::OK
    };

    std::process::exit(exit_code);
}

async fn run_command(cmd: Commands, factory: &Factory) -> anyhow::Result<()> {
    match cmd {
        Commands::Gist(sub) => sub.run(factory).await,
        Commands::Version(args) => {
            args.run(
                &factory.io,
                env!("CARGO_PKG_VERSION"),
                option_env!("GISTS_BUILD_DATE").unwrap_or(""),
            );
            Ok(())
        }
    }
}
