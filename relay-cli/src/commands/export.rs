// relay-cli/src/commands/export.rs
use crate::output::{print, print_error, Output, OutputFormat};
use anyhow::Result;
use relay_client::RelayService;

/// Print the whole account as one document. Each failed group is reported
/// before the summary error; nothing is printed to stdout on failure.
pub async fn handle_export(service: &RelayService, format: OutputFormat) -> Result<()> {
    match service.export().await {
        Ok(data) => {
            print(format, &Output::Export(data))?;
            Ok(())
        }
        Err(err) => {
            for failure in &err.failures {
                print_error(&failure.to_string());
            }
            Err(err.into())
        }
    }
}
