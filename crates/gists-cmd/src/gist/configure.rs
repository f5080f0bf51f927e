//! `gists configure` command.

use anyhow::Result;
use clap::Args;

use gists_core::ios_println;

use crate::factory::Factory;
use crate::handlers::CredentialArgs;

/// Store credentials in the configuration file.
#[derive(Debug, Args)]
pub struct ConfigureArgs {
    #[command(flatten)]
    creds: CredentialArgs,
}

impl ConfigureArgs {
    /// Run the configure command.
    ///
    /// # Errors
    ///
    /// Returns an error if no user is known or the file cannot be written.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        let mut store = factory.credentials()?;
        let user = self.creds.resolve_user(&**store)?;
        store.set_user(&user);
        if let Some(ref password) = self.creds.password {
            store.set_password(password);
        }
        if let Some(ref token) = self.creds.token {
            store.set_token(token);
        }
        store.write()?;

        ios_println!(factory.io, "Credentials stored in '{}'", store.location());
        Ok(())
    }
}
