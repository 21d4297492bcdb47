// relay-cli/src/commands/users.rs
use crate::output::{print, Output, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use relay_client::RelayService;

#[derive(Subcommand, Clone, Debug)]
pub enum UsersCommands {
    /// List users on the account
    List,
}

pub async fn handle_users(
    service: &RelayService,
    cmd: UsersCommands,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        UsersCommands::List => {
            let users = service.api().list_users().await?;
            print(format, &Output::Users(users))?;
            Ok(())
        }
    }
}
