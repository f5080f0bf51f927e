//! Gist commands.
//!
//! Every command follows the same pipeline: resolve arguments, run one
//! action into an [`Outcome`], print the rendered outcome on stdout.

pub mod authorize;
pub mod configure;
pub mod create;
pub mod delete;
pub mod fork;
pub mod get;
pub mod list;
pub mod show;
pub mod star;
pub mod update;

use anyhow::Result;
use clap::Subcommand;

use gists_api::Auth;
use gists_core::ios_println;

use crate::factory::Factory;
use crate::formatters::format_outcome;
use crate::handlers::CredentialArgs;
use crate::outcome::Outcome;

/// Manage gists.
#[derive(Debug, Subcommand)]
pub enum GistCommand {
    /// List a user's gists.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Show a gist, or one of its files.
    Show(show::ShowArgs),
    /// Download a gist file.
    #[command(alias = "download")]
    Get(get::GetArgs),
    /// Create a gist from local files.
    Create(create::CreateArgs),
    /// Update a gist's description or files.
    Update(update::UpdateArgs),
    /// Delete a gist.
    Delete(delete::DeleteArgs),
    /// Obtain a personal access token and store it.
    Authorize(authorize::AuthorizeArgs),
    /// Store credentials in the configuration file.
    Configure(configure::ConfigureArgs),
    /// Fork a gist.
    Fork(fork::ForkArgs),
    /// Star a gist.
    Star(star::StarArgs),
    /// Remove the star from a gist.
    Unstar(star::UnstarArgs),
}

impl GistCommand {
    /// Run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if arguments cannot be resolved or the client cannot
    /// be built. Action failures are printed, not returned.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        match self {
            Self::List(args) => args.run(factory).await,
            Self::Show(args) => args.run(factory).await,
            Self::Get(args) => args.run(factory).await,
            Self::Create(args) => args.run(factory).await,
            Self::Update(args) => args.run(factory).await,
            Self::Delete(args) => args.run(factory).await,
            Self::Authorize(args) => args.run(factory).await,
            Self::Configure(args) => args.run(factory),
            Self::Fork(args) => args.run(factory).await,
            Self::Star(args) => args.run(factory).await,
            Self::Unstar(args) => args.run(factory).await,
        }
    }
}

/// Render `outcome` on stdout.
fn print_outcome(factory: &Factory, outcome: &Outcome) {
    let ios = &factory.io;
    let text = format_outcome(outcome, ios.terminal_width(), ios.color_scheme());
    ios_println!(ios, "{text}");
}

/// User name and mandatory credential for commands acting as the user.
fn authenticated(factory: &Factory, creds: &CredentialArgs) -> Result<(String, Auth)> {
    let store = factory.credentials()?;
    let user = creds.resolve_user(&**store)?;
    let auth = creds.resolve_auth(&user, &**store)?;
    Ok((user, auth))
}

/// Any available credential, for read-only commands.
fn optional_auth(factory: &Factory, creds: &CredentialArgs) -> Result<Option<Auth>> {
    let store = factory.credentials()?;
    Ok(creds.optional_auth(&**store))
}
