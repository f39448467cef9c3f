//! drivebay - A terminal editor for virtual machine drive configurations
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use drivebay::headless::{run_headless, HeadlessCommand, HeadlessEvent};
use drivebay::startup::{load_app_settings, open_configuration, DEFAULT_VM_CONFIG};

/// drivebay - edit the drive list of a virtual machine
#[derive(Parser, Debug)]
#[command(name = "drivebay")]
#[command(about = "A terminal editor for virtual machine drive configurations", long_about = None)]
struct Args {
    /// VM configuration file (TOML); created on first change if missing
    #[arg(value_name = "VM_CONFIG", default_value = DEFAULT_VM_CONFIG)]
    config: PathBuf,

    /// Run one command without the TUI (JSON output)
    #[command(subcommand)]
    command: Option<HeadlessCommand>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    drivebay_core::logging::init()?;

    let settings = load_app_settings();
    let config = open_configuration(&args.config, &settings)?;

    match args.command {
        None => {
            drivebay_tui::run(config, settings).await?;
        }
        Some(command) => {
            let defaults = settings.defaults.draft();
            if let Err(e) = run_headless(&config, command, &defaults).await {
                tracing::error!("Headless command failed: {}", e);
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
