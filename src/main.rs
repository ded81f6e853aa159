// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

mod args;

use anyhow::{Context, Result};
use args::{Args, Command, TallyArgs};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use taka_counter::tally;
#[cfg(feature = "tui")]
use taka_counter::Session;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level);
    debug!("Log level set to {}", args.log_level.to_string().to_lowercase());

    match &args.command {
        Some(Command::Tally(tally_args)) => run_tally(tally_args)?,
        Some(Command::Ui) | None => run_ui_mode(args.dark)?,
    }

    Ok(())
}

fn run_tally(args: &TallyArgs) -> Result<()> {
    let report = tally(args.entries.as_slice()).context("Failed to read tally entries")?;
    debug!(entries = args.entries.len(), total = %report.total, "tally complete");

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", json);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(dark: bool) -> Result<()> {
    let mut app = ui::App::new(Session::new(dark));
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_dark: bool) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: taka-counter tally 1000=5 50=3");
    std::process::exit(1);
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate's events, at the requested level.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
