// relay-cli/src/utils.rs
use anyhow::{Context, Result};
use dialoguer::Confirm;

/// Ask a yes/no question. Anything but an explicit yes declines.
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation (use --force to skip the prompt)")
}
