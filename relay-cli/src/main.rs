mod commands;
mod output;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{
    handle_contacts, handle_export, handle_masks, handle_phones, handle_profiles, handle_users,
    ContactsCommands, MasksArgs, PhonesCommands, ProfilesCommands, UsersCommands,
};
use output::{print_error, ExitCode, OutputFormat};
use relay_client::{CancellationToken, Config, Overrides, RelayService};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "relayctl", version)]
#[command(about = "A command-line interface for Firefox Relay", long_about = None)]
struct Cli {
    /// API key for authentication [env: RELAYCTL_KEY]
    #[arg(long, global = true, value_name = "API_KEY")]
    key: Option<String>,
    /// Base URL for the API [default: https://relay.firefox.com]
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,
    /// HTTP request timeout in seconds [default: 30]
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: Option<u64>,
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage email masks
    Masks(MasksArgs),
    /// Manage phone masks and forwarding numbers
    #[command(subcommand)]
    Phones(PhonesCommands),
    /// Manage inbound contacts of your phone mask
    #[command(subcommand)]
    Contacts(ContactsCommands),
    /// Show account profiles
    #[command(subcommand)]
    Profiles(ProfilesCommands),
    /// Show account users
    #[command(subcommand)]
    Users(UsersCommands),
    /// Export all account data as one document
    Export,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    watch_signals(cancel.clone());

    let code = match run(cli, cancel).await {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::for_error(&err)
        }
    };
    std::process::exit(code.code());
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,relayctl=debug,relay_api=debug,relay_client=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Cancel in-flight requests on Ctrl-C or SIGTERM
fn watch_signals(cancel: CancellationToken) {
    tokio::spawn(async move {
        if let Some(signal) = shutdown_signal().await {
            eprintln!("\nReceived signal {}, cancelling request...", signal);
            cancel.cancel();
        }
    });
}

async fn shutdown_signal() -> Option<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate()).ok()?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res.ok().map(|_| "interrupt"),
            _ = terminate.recv() => Some("terminated"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok().map(|_| "interrupt")
    }
}

async fn run(cli: Cli, cancel: CancellationToken) -> Result<()> {
    let overrides = Overrides {
        api_key: cli.key,
        base_url: cli.base_url,
        timeout: cli.timeout.map(Duration::from_secs),
    };
    let settings = Config::load()?.resolve(overrides)?;
    debug!(
        base_url = %settings.base_url,
        timeout_secs = settings.timeout.as_secs(),
        "resolved settings"
    );

    let user_agent = format!("relayctl/{}", env!("CARGO_PKG_VERSION"));
    let service = RelayService::connect(&settings, &user_agent, cancel)
        .context("Failed to set up HTTP client")?;

    let format = cli.output;
    match cli.command {
        Commands::Masks(args) => handle_masks(&service, args, format).await,
        Commands::Phones(cmd) => handle_phones(&service, cmd, format).await,
        Commands::Contacts(cmd) => handle_contacts(&service, cmd, format).await,
        Commands::Profiles(cmd) => handle_profiles(&service, cmd, format).await,
        Commands::Users(cmd) => handle_users(&service, cmd, format).await,
        Commands::Export => handle_export(&service, format).await,
    }
}
