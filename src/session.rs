// Session - The single ledger and theme flag owned by one UI run

use crate::denomination::Denomination;
use crate::ledger::{DenominationLedger, Entry, RawInput};
use crate::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: DenominationLedger,
    theme: Theme,
}

impl Session {
    pub fn new(dark: bool) -> Self {
        Session {
            ledger: DenominationLedger::new(),
            theme: Theme::from_dark_flag(dark),
        }
    }

    pub fn ledger(&self) -> &DenominationLedger {
        &self.ledger
    }

    pub fn set_count<'a, R>(&mut self, denomination: Denomination, raw: R)
    where
        R: Into<RawInput<'a>>,
    {
        self.ledger.set_count(denomination, raw);
    }

    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    pub fn counts(&self) -> Vec<Entry> {
        self.ledger.counts()
    }

    pub fn total(&self) -> u128 {
        self.ledger.total()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        tracing::debug!(theme = self.theme.as_str(), "theme toggled");
    }
}
