// relay-cli/src/commands/contacts.rs
use crate::output::{print, Output, OutputFormat};
use anyhow::{bail, Result};
use clap::Subcommand;
use relay_client::{RelayService, UpdateInboundContactRequest};

#[derive(Subcommand, Clone, Debug)]
pub enum ContactsCommands {
    /// List numbers that called or texted your phone mask
    List,
    /// Block or unblock a contact
    Update {
        id: i64,
        /// Block this contact
        #[arg(long, conflicts_with = "unblock")]
        block: bool,
        /// Unblock this contact
        #[arg(long)]
        unblock: bool,
    },
}

pub async fn handle_contacts(
    service: &RelayService,
    cmd: ContactsCommands,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        ContactsCommands::List => {
            let contacts = service.api().list_inbound_contacts().await?;
            print(format, &Output::Contacts(contacts))?;
            Ok(())
        }
        ContactsCommands::Update { id, block, unblock } => {
            if !block && !unblock {
                bail!("must specify either --block or --unblock");
            }
            let req = UpdateInboundContactRequest {
                blocked: Some(block),
            };
            let contact = service.api().update_inbound_contact(id, &req).await?;
            print(format, &Output::Contact(contact))?;
            Ok(())
        }
    }
}
