// relay-cli/src/commands/phones.rs
use crate::output::{print, print_success, Output, OutputFormat};
use crate::utils::confirm;
use anyhow::{anyhow, bail, Result};
use clap::Subcommand;
use relay_client::{
    RegisterRealPhoneRequest, RelayError, RelayService, UpdateRelayNumberRequest,
    VerifyRealPhoneRequest,
};

#[derive(Subcommand, Clone, Debug)]
pub enum PhonesCommands {
    /// List phone masks
    List,
    /// Enable or disable call and text forwarding
    Update {
        id: i64,
        /// Enable call/text forwarding
        #[arg(long, conflicts_with = "disabled")]
        enabled: bool,
        /// Disable call/text forwarding
        #[arg(long)]
        disabled: bool,
    },
    /// Suggest numbers available for a new phone mask
    Discover,
    /// Search available numbers by area code
    Search {
        /// Area code to filter phone numbers
        #[arg(long, value_parser = parse_area_code)]
        areacode: String,
    },
    /// Manage the real number calls and texts are forwarded to
    #[command(subcommand)]
    Forward(ForwardCommands),
}

#[derive(Subcommand, Clone, Debug)]
pub enum ForwardCommands {
    /// List forwarding numbers
    List,
    /// Get a forwarding number by ID
    Get { id: i64 },
    /// Register a forwarding number (E.164, e.g. +15551234567)
    Register { number: String },
    /// Verify a forwarding number with the code sent by SMS
    Verify {
        id: i64,
        number: String,
        code: String,
    },
    /// Delete a forwarding number
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn parse_area_code(value: &str) -> Result<String, String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("invalid area code '{}': expected digits", value))
    }
}

pub async fn handle_phones(
    service: &RelayService,
    cmd: PhonesCommands,
    format: OutputFormat,
) -> Result<()> {
    let api = service.api();

    match cmd {
        PhonesCommands::List => {
            let numbers = api.list_relay_numbers().await?;
            print(format, &Output::PhoneMasks(numbers))?;
            Ok(())
        }
        PhonesCommands::Update {
            id,
            enabled,
            disabled,
        } => {
            if !enabled && !disabled {
                bail!("must specify either --enabled or --disabled");
            }
            let req = UpdateRelayNumberRequest {
                enabled: Some(enabled),
            };
            let number = api.update_relay_number(id, &req).await?;
            print(format, &Output::PhoneMask(number))?;
            Ok(())
        }
        PhonesCommands::Discover => {
            let suggestions = api.relay_number_suggestions().await?;
            print(format, &Output::Suggestions(suggestions))?;
            Ok(())
        }
        PhonesCommands::Search { areacode } => {
            let options = api.search_relay_numbers(&areacode).await?;
            print(format, &Output::NumberOptions(options))?;
            Ok(())
        }
        PhonesCommands::Forward(cmd) => handle_forward(service, cmd, format).await,
    }
}

async fn handle_forward(
    service: &RelayService,
    cmd: ForwardCommands,
    format: OutputFormat,
) -> Result<()> {
    let api = service.api();

    match cmd {
        ForwardCommands::List => {
            let phones = api.list_real_phones().await?;
            print(format, &Output::ForwardingNumbers(phones))?;
            Ok(())
        }
        ForwardCommands::Get { id } => {
            let phone = api
                .list_real_phones()
                .await?
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow!("forwarding number with ID {} not found", id))?;
            print(format, &Output::ForwardingNumber(phone))?;
            Ok(())
        }
        ForwardCommands::Register { number } => {
            let req = RegisterRealPhoneRequest { number };
            match api.register_real_phone(&req).await {
                Ok(phone) => print(format, &Output::ForwardingNumber(phone))?,
                Err(err) => show_rejection(err)?,
            }
            Ok(())
        }
        ForwardCommands::Verify { id, number, code } => {
            let req = VerifyRealPhoneRequest {
                number,
                verification_code: code,
            };
            match api.verify_real_phone(id, &req).await {
                Ok(phone) => print(format, &Output::ForwardingNumber(phone))?,
                Err(err) => show_rejection(err)?,
            }
            Ok(())
        }
        ForwardCommands::Delete { id, force } => {
            if !force {
                let prompt = format!(
                    "Are you sure you want to delete forwarding number {}? This cannot be undone.",
                    id
                );
                if !confirm(&prompt)? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            api.delete_real_phone(id).await?;
            print_success(&format!("Forwarding number {} deleted successfully.", id));
            Ok(())
        }
    }
}

/// The service explains rejected registrations and codes in the 400 body,
/// which is shown as-is. Anything else is a real failure.
fn show_rejection(err: RelayError) -> Result<()> {
    match err {
        RelayError::Api { status: 400, body } => {
            println!("{}", body);
            Ok(())
        }
        other => Err(other.into()),
    }
}
