// 🧾 Tally - Evaluate VALUE=COUNT entries without the interactive screen
//
// Entries run through the same ledger as the UI, in order, so later entries
// for the same note overwrite earlier ones and bad counts coerce to zero.

use crate::denomination::Denomination;
use crate::error::{CounterError, Result};
use crate::format::{breakdown, format_taka};
use crate::ledger::DenominationLedger;
use serde::Serialize;

/// One parsed `VALUE=COUNT` argument; the count stays raw until applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub denomination: Denomination,
    pub raw_count: String,
}

impl TallyEntry {
    pub fn parse(input: &str) -> Result<Self> {
        let (value, count) = input
            .split_once('=')
            .ok_or_else(|| CounterError::MalformedEntry(input.to_string()))?;

        let value: u64 = value
            .trim()
            .trim_start_matches(crate::denomination::TAKA_SIGN)
            .parse()
            .map_err(|_| CounterError::MalformedEntry(input.to_string()))?;

        Ok(TallyEntry {
            denomination: Denomination::try_from(value)?,
            raw_count: count.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    /// Serialized as the face value
    #[serde(rename = "value")]
    pub denomination: Denomination,
    pub count: u64,
    pub subtotal: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyReport {
    pub rows: Vec<TallyRow>,
    pub total: u128,
}

impl TallyReport {
    pub fn from_ledger(ledger: &DenominationLedger) -> Self {
        let rows = ledger
            .iter()
            .map(|e| TallyRow {
                denomination: e.denomination,
                count: e.count,
                subtotal: e.subtotal(),
            })
            .collect();

        TallyReport {
            rows,
            total: ledger.total(),
        }
    }

    /// Human-readable lines: one per non-zero note, then the total
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            if let Some(line) = breakdown(row.denomination, row.count) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.push_str(&format!("Total Amount: {}\n", format_taka(self.total)));
        out
    }
}

/// Parse every entry first, then apply them to a fresh ledger
pub fn tally<S: AsRef<str>>(inputs: &[S]) -> Result<TallyReport> {
    let entries = inputs
        .iter()
        .map(|s| TallyEntry::parse(s.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let mut ledger = DenominationLedger::new();
    for entry in &entries {
        ledger.set_count(entry.denomination, entry.raw_count.as_str());
    }

    Ok(TallyReport::from_ledger(&ledger))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        let entry = TallyEntry::parse("1000=5").unwrap();
        assert_eq!(entry.denomination, Denomination::Tk1000);
        assert_eq!(entry.raw_count, "5");

        let entry = TallyEntry::parse("৳50=abc").unwrap();
        assert_eq!(entry.denomination, Denomination::Tk50);
        assert_eq!(entry.raw_count, "abc");
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert_eq!(
            TallyEntry::parse("1000"),
            Err(CounterError::MalformedEntry("1000".to_string()))
        );
        assert_eq!(
            TallyEntry::parse("ten=3"),
            Err(CounterError::MalformedEntry("ten=3".to_string()))
        );
        assert_eq!(
            TallyEntry::parse("7=3"),
            Err(CounterError::UnknownDenomination(7))
        );
    }

    #[test]
    fn test_tally_scenario() {
        let report = tally(&["1000=5", "50=3"]).unwrap();

        assert_eq!(report.total, 5150);
        assert_eq!(report.rows.len(), 8);
        assert_eq!(report.rows[0].count, 5);
        assert_eq!(report.rows[0].subtotal, 5000);
        assert_eq!(report.rows[4].denomination, Denomination::Tk50);
        assert_eq!(report.rows[4].count, 3);
    }

    #[test]
    fn test_tally_applies_normalization_in_order() {
        let report = tally(&["500=4", "500=-2", "100="]).unwrap();
        assert_eq!(report.rows[1].count, 0);
        assert_eq!(report.rows[3].count, 0);
        assert_eq!(report.total, 0);

        let report = tally(&["20=1", "20=6"]).unwrap();
        assert_eq!(report.total, 120);
    }

    #[test]
    fn test_bad_entry_fails_whole_tally() {
        assert!(tally(&["1000=1", "3=1"]).is_err());
    }

    #[test]
    fn test_render_text() {
        let report = tally(&["1000=120", "5=1"]).unwrap();
        assert_eq!(
            report.render_text(),
            "৳1000 x 120 = ৳120000\n৳5 x 1 = ৳5\nTotal Amount: ৳1,20,005\n"
        );

        let empty = tally::<&str>(&[]).unwrap();
        assert_eq!(empty.render_text(), "Total Amount: ৳0\n");
    }

    #[test]
    fn test_json_shape() {
        let report = tally(&["200=2"]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["total"], 400);
        assert_eq!(json["rows"][2]["value"], 200);
        assert_eq!(json["rows"][2]["count"], 2);
        assert_eq!(json["rows"][2]["subtotal"], 400);
    }
}
