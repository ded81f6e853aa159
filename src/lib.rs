// Taka Counter - Core Library
// Exposes the ledger for the TUI, the tally command, and tests

pub mod denomination;
pub mod error;
pub mod format;
pub mod ledger;
pub mod session;
pub mod tally;
pub mod theme;

// Re-export commonly used types
pub use denomination::{Denomination, TAKA_SIGN};
pub use error::CounterError;
pub use format::{breakdown, format_taka, group_south_asian, input_display};
pub use ledger::{compute_total, normalize_count, DenominationLedger, Entry, RawInput};
pub use session::Session;
pub use tally::{tally, TallyEntry, TallyReport, TallyRow};
pub use theme::{Palette, Rgb, Theme};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
