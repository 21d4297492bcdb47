// relay-cli/src/commands/masks.rs
use crate::output::{print, print_success, Output, OutputFormat};
use crate::utils::confirm;
use anyhow::Result;
use clap::{Args, Subcommand};
use relay_client::{MaskChanges, MaskDraft, MaskKind, RelayService};

#[derive(Args, Debug)]
pub struct MasksArgs {
    /// Mask type: true for random masks, false for custom domain masks.
    /// Without it, list and get cover both types and writes target random masks.
    #[arg(long, global = true, value_name = "BOOL")]
    pub random: Option<bool>,
    #[command(subcommand)]
    pub command: MasksCommands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum MasksCommands {
    /// List masks
    List,
    /// Get a mask by ID
    Get { id: i64 },
    /// Create a mask
    Create {
        /// Description for the mask
        #[arg(long)]
        description: Option<String>,
        /// Site the mask was generated for (random masks only)
        #[arg(long)]
        generated_for: Option<String>,
        /// Site the mask is used on (random masks only)
        #[arg(long)]
        used_on: Option<String>,
        /// Local part of the address (custom domain masks only, required)
        #[arg(long)]
        address: Option<String>,
        /// Block promotional emails
        #[arg(long)]
        block_list: bool,
        /// Create in disabled state
        #[arg(long)]
        disabled: bool,
    },
    /// Update a mask
    Update {
        id: i64,
        /// Enable the mask
        #[arg(long, conflicts_with = "disabled")]
        enabled: bool,
        /// Disable the mask
        #[arg(long)]
        disabled: bool,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Site the mask is used on (random masks only)
        #[arg(long)]
        used_on: Option<String>,
        /// Block promotional emails
        #[arg(long, conflicts_with = "no_block_list")]
        block_list: bool,
        /// Stop blocking promotional emails
        #[arg(long)]
        no_block_list: bool,
    },
    /// Delete a mask
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// `true`/`false` pair of flags to an optional change
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn describe(kind: MaskKind) -> &'static str {
    match kind {
        MaskKind::Custom => "custom domain mask",
        _ => "random mask",
    }
}

pub async fn handle_masks(
    service: &RelayService,
    args: MasksArgs,
    format: OutputFormat,
) -> Result<()> {
    let kind = MaskKind::from(args.random);

    match args.command {
        MasksCommands::List => {
            let masks = service.list_masks(kind).await?;
            print(format, &Output::from(masks))?;
            Ok(())
        }
        MasksCommands::Get { id } => {
            let mask = service.get_mask(id, kind).await?;
            print(format, &Output::from(mask))?;
            Ok(())
        }
        MasksCommands::Create {
            description,
            generated_for,
            used_on,
            address,
            block_list,
            disabled,
        } => {
            let draft = MaskDraft {
                enabled: !disabled,
                description,
                block_list_emails: block_list,
                generated_for,
                used_on,
                address,
            };
            let mask = service.create_mask(kind, draft).await?;
            print(format, &Output::from(mask))?;
            Ok(())
        }
        MasksCommands::Update {
            id,
            enabled,
            disabled,
            description,
            used_on,
            block_list,
            no_block_list,
        } => {
            let changes = MaskChanges {
                enabled: toggle(enabled, disabled),
                description,
                block_list_emails: toggle(block_list, no_block_list),
                used_on,
            };
            let mask = service.update_mask(id, kind, changes).await?;
            print(format, &Output::from(mask))?;
            Ok(())
        }
        MasksCommands::Delete { id, force } => {
            let target = kind.for_write();
            if !force {
                let prompt = format!(
                    "Are you sure you want to delete {} {}? This cannot be undone.",
                    describe(target),
                    id
                );
                if !confirm(&prompt)? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            let deleted = service.delete_mask(id, target).await?;
            let message = match deleted {
                MaskKind::Custom => format!("Custom domain mask {} deleted successfully.", id),
                _ => format!("Random mask {} deleted successfully.", id),
            };
            print_success(&message);
            Ok(())
        }
    }
}
