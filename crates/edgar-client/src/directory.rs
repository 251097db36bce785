//! Company name and ticker to CIK lookup tables

use crate::error::Result;
use crate::model::Cik;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of `company_tickers.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerEntry {
    pub cik_str: Cik,
    pub ticker: String,
    pub title: String,
}

/// Name and ticker indexes built from the SEC company ticker file
///
/// Entries are applied in document order, so for a duplicated name or ticker
/// the last entry wins.
#[derive(Debug, Clone, Default)]
pub struct CikDirectory {
    by_name: HashMap<String, Cik>,
    by_ticker: HashMap<String, Cik>,
}

impl CikDirectory {
    pub fn from_entries(entries: impl IntoIterator<Item = TickerEntry>) -> Self {
        let mut directory = Self::default();
        for entry in entries {
            directory.by_name.insert(entry.title, entry.cik_str);
            directory.by_ticker.insert(entry.ticker, entry.cik_str);
        }
        directory
    }

    /// Parse the `{"0": {...}, "1": {...}}` document served by the SEC
    pub fn from_json(body: &str) -> Result<Self> {
        // preserve_order keeps the document order for the duplicate rule
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;
        let entries = raw
            .into_iter()
            .map(|(_, value)| serde_json::from_value::<TickerEntry>(value))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::from_entries(entries))
    }

    /// Company title -> CIK
    pub fn by_name(&self) -> &HashMap<String, Cik> {
        &self.by_name
    }

    /// Ticker symbol -> CIK
    pub fn by_ticker(&self) -> &HashMap<String, Cik> {
        &self.by_ticker
    }

    /// Exact ticker first, then the upper-cased form
    pub fn cik_for_ticker(&self, ticker: &str) -> Option<Cik> {
        self.by_ticker
            .get(ticker)
            .or_else(|| self.by_ticker.get(&ticker.to_uppercase()))
            .copied()
    }

    pub fn cik_for_name(&self, name: &str) -> Option<Cik> {
        self.by_name.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_ticker.is_empty()
    }

    /// Number of distinct tickers; one company may list several
    pub fn len(&self) -> usize {
        self.by_ticker.len()
    }
}
