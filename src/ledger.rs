// 🧮 Denomination Ledger - Counts per banknote and the derived total
//
// total = Σ value × count, recomputed inside every mutation.
// There is no other path that writes the total.

use crate::denomination::Denomination;
use serde::Serialize;
use tracing::{debug, trace};

// ============================================================================
// RAW INPUT
// ============================================================================

/// Whatever the presentation layer received from the user for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Cleared field
    Empty,

    /// Text as typed (may be non-numeric, negative, or have trailing junk)
    Text(&'a str),

    /// Already-numeric input
    Number(i128),
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(s: &'a str) -> Self {
        RawInput::Text(s)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(s: &'a String) -> Self {
        RawInput::Text(s.as_str())
    }
}

impl From<i64> for RawInput<'_> {
    fn from(n: i64) -> Self {
        RawInput::Number(n as i128)
    }
}

impl From<u64> for RawInput<'_> {
    fn from(n: u64) -> Self {
        RawInput::Number(n as i128)
    }
}

impl From<i32> for RawInput<'_> {
    fn from(n: i32) -> Self {
        RawInput::Number(n as i128)
    }
}

impl From<u32> for RawInput<'_> {
    fn from(n: u32) -> Self {
        RawInput::Number(n as i128)
    }
}

/// Map any raw input onto a stored count.
///
/// Text is read as an integer prefix: leading whitespace, an optional sign,
/// then the longest run of digits. No digits, or a negative number, gives 0.
/// Values beyond `u64::MAX` saturate.
pub fn normalize_count(raw: RawInput<'_>) -> u64 {
    match raw {
        RawInput::Empty => 0,
        RawInput::Number(n) if n < 0 => 0,
        RawInput::Number(n) => u64::try_from(n).unwrap_or(u64::MAX),
        RawInput::Text(text) => parse_count_text(text),
    }
}

fn parse_count_text(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if run == 0 {
        return 0;
    }

    let mut parsed: u64 = 0;
    let mut saturated = false;
    for b in digits[..run].bytes() {
        match parsed
            .checked_mul(10)
            .and_then(|p| p.checked_add(u64::from(b - b'0')))
        {
            Some(next) => parsed = next,
            None => {
                saturated = true;
                break;
            }
        }
    }

    if negative {
        // "-0" and "-12" alike
        0
    } else if saturated {
        u64::MAX
    } else {
        parsed
    }
}

/// Σ value × count over every (denomination, count) pair
pub fn compute_total<I>(counts: I) -> u128
where
    I: IntoIterator<Item = (Denomination, u64)>,
{
    counts
        .into_iter()
        .map(|(d, count)| u128::from(d.value()) * u128::from(count))
        .sum()
}

// ============================================================================
// LEDGER
// ============================================================================

/// One (denomination, count) pair as handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub denomination: Denomination,
    pub count: u64,
}

impl Entry {
    /// value × count for this row
    pub fn subtotal(&self) -> u128 {
        u128::from(self.denomination.value()) * u128::from(self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationLedger {
    /// Slot i holds the count for `Denomination::ALL[i]`
    counts: [u64; Denomination::COUNT],
    total: u128,
}

impl DenominationLedger {
    /// Fresh ledger, every count at zero
    pub fn new() -> Self {
        DenominationLedger {
            counts: [0; Denomination::COUNT],
            total: 0,
        }
    }

    /// Normalize `raw` and store it for exactly one denomination
    pub fn set_count<'a, R>(&mut self, denomination: Denomination, raw: R)
    where
        R: Into<RawInput<'a>>,
    {
        let raw = raw.into();
        let count = normalize_count(raw);
        if count == 0 && !is_explicit_zero(raw) {
            debug!(value = denomination.value(), ?raw, "coerced input to zero");
        }

        self.counts[denomination.index()] = count;
        self.recompute();

        trace!(
            value = denomination.value(),
            count,
            total = %self.total,
            "count updated"
        );
    }

    /// Zero every count
    pub fn reset(&mut self) {
        self.counts = [0; Denomination::COUNT];
        self.recompute();
        debug!("ledger reset");
    }

    /// Current count for one denomination
    pub fn count(&self, denomination: Denomination) -> u64 {
        self.counts[denomination.index()]
    }

    /// All entries in declaration order
    pub fn counts(&self) -> Vec<Entry> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        Denomination::ALL.iter().map(move |&d| Entry {
            denomination: d,
            count: self.counts[d.index()],
        })
    }

    pub fn total(&self) -> u128 {
        self.total
    }

    /// True when no notes are entered at all
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    fn recompute(&mut self) {
        self.total = compute_total(self.iter().map(|e| (e.denomination, e.count)));
    }
}

impl Default for DenominationLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn is_explicit_zero(raw: RawInput<'_>) -> bool {
    match raw {
        RawInput::Number(0) => true,
        RawInput::Text(t) => {
            let t = t.trim();
            !t.is_empty() && t.bytes().all(|b| b == b'0')
        }
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
