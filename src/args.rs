//! Command-line interface for the taka counter.

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

/// taka-counter: count Bangladeshi banknotes and see the total.
///
/// With no subcommand an interactive screen opens with one field per note
/// (৳1000 down to ৳5). Nothing is saved when it closes.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    /// Start with the dark theme instead of the light one.
    #[arg(long)]
    pub dark: bool,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. Logs go to stderr.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive counter (the default).
    Ui,

    /// Total a list of VALUE=COUNT entries without opening the screen.
    ///
    /// Entries apply in order with the same rules as the input fields: a count
    /// that is blank, not a number, or negative counts as zero, and a later
    /// entry for the same note replaces an earlier one.
    Tally(TallyArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct TallyArgs {
    /// Entries such as 1000=5 50=3
    #[arg(value_name = "VALUE=COUNT")]
    pub entries: Vec<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
