// relay-cli/src/commands/profiles.rs
use crate::output::{print, Output, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use relay_client::RelayService;

#[derive(Subcommand, Clone, Debug)]
pub enum ProfilesCommands {
    /// List profiles with premium status and email statistics
    List,
}

pub async fn handle_profiles(
    service: &RelayService,
    cmd: ProfilesCommands,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        ProfilesCommands::List => {
            let profiles = service.api().list_profiles().await?;
            print(format, &Output::Profiles(profiles))?;
            Ok(())
        }
    }
}
