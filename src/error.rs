// ⚠️ Counter Errors
// Only lookups that cross the program boundary can fail. Count edits never do.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// Face value outside the fixed banknote set
    #[error("unknown denomination: {0} (expected one of 1000, 500, 200, 100, 50, 20, 10, 5)")]
    UnknownDenomination(u64),

    /// Tally entry that is not of the form VALUE=COUNT
    #[error("malformed entry '{0}': expected VALUE=COUNT, e.g. 500=3")]
    MalformedEntry(String),
}

pub type Result<T> = std::result::Result<T, CounterError>;
