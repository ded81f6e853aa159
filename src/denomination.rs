// 💵 Denomination - The fixed set of Bangladeshi taka banknotes
//
// The key set never grows or shrinks at runtime, so it is a closed enum
// rather than a map keyed by numeric strings.

use crate::error::CounterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Taka sign used for every rendered amount
pub const TAKA_SIGN: char = '৳';

// ============================================================================
// DENOMINATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum Denomination {
    Tk1000,
    Tk500,
    Tk200,
    Tk100,
    Tk50,
    Tk20,
    Tk10,
    Tk5,
}

impl Denomination {
    /// Every denomination, in declaration (display) order
    pub const ALL: [Denomination; 8] = [
        Denomination::Tk1000,
        Denomination::Tk500,
        Denomination::Tk200,
        Denomination::Tk100,
        Denomination::Tk50,
        Denomination::Tk20,
        Denomination::Tk10,
        Denomination::Tk5,
    ];

    /// Number of denominations tracked by a ledger
    pub const COUNT: usize = Self::ALL.len();

    /// Face value in taka
    pub fn value(&self) -> u64 {
        match self {
            Denomination::Tk1000 => 1000,
            Denomination::Tk500 => 500,
            Denomination::Tk200 => 200,
            Denomination::Tk100 => 100,
            Denomination::Tk50 => 50,
            Denomination::Tk20 => 20,
            Denomination::Tk10 => 10,
            Denomination::Tk5 => 5,
        }
    }

    /// Position in `ALL`, used as the slot index inside the ledger
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Label as shown next to an input field, e.g. `৳1000`
    pub fn label(&self) -> String {
        format!("{}{}", TAKA_SIGN, self.value())
    }
}

impl TryFrom<u64> for Denomination {
    type Error = CounterError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Denomination::ALL
            .iter()
            .copied()
            .find(|d| d.value() == value)
            .ok_or(CounterError::UnknownDenomination(value))
    }
}

impl From<Denomination> for u64 {
    fn from(d: Denomination) -> Self {
        d.value()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TAKA_SIGN, self.value())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let values: Vec<u64> = Denomination::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![1000, 500, 200, 100, 50, 20, 10, 5]);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, d) in Denomination::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_lookup_by_face_value() {
        assert_eq!(Denomination::try_from(1000u64).unwrap(), Denomination::Tk1000);
        assert_eq!(Denomination::try_from(5u64).unwrap(), Denomination::Tk5);
        assert_eq!(
            Denomination::try_from(2u64),
            Err(CounterError::UnknownDenomination(2))
        );
        assert_eq!(
            Denomination::try_from(0u64),
            Err(CounterError::UnknownDenomination(0))
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(Denomination::Tk200.label(), "৳200");
        assert_eq!(Denomination::Tk50.to_string(), "৳50");
    }

    #[test]
    fn test_serde_as_face_value() {
        let json = serde_json::to_string(&Denomination::Tk500).unwrap();
        assert_eq!(json, "500");

        let d: Denomination = serde_json::from_str("20").unwrap();
        assert_eq!(d, Denomination::Tk20);

        assert!(serde_json::from_str::<Denomination>("30").is_err());
    }
}
