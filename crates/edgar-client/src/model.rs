//! Identifier and period types shared by the client and the CLI

use crate::error::{EdgarError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Largest value that still fits the 10-digit rendering
const MAX_CIK: u64 = 9_999_999_999;

/// Central Index Key, SEC's numeric identifier for a filer
///
/// Displays as the 10-digit zero-padded form used in every EDGAR URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cik(u64);

impl Cik {
    /// Wrap a raw CIK value
    ///
    /// `value` must be at most `9_999_999_999`; use [`Cik::try_new`] for
    /// values that have not been checked.
    pub const fn new(value: u64) -> Self {
        debug_assert!(value <= MAX_CIK, "CIK exceeds 10 digits");
        Self(value)
    }

    /// Checked constructor, rejecting values wider than 10 digits
    pub fn try_new(value: u64) -> Result<Self> {
        if value > MAX_CIK {
            return Err(EdgarError::InvalidCik(value.to_string()));
        }
        Ok(Self(value))
    }

    /// The numeric value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// `320193` -> `"0000320193"`
    pub fn padded(self) -> String {
        format!("{:010}", self.0)
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010}", self.0)
    }
}

impl TryFrom<u64> for Cik {
    type Error = EdgarError;

    fn try_from(value: u64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl FromStr for Cik {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EdgarError::InvalidCik(s.to_string()));
        }

        trimmed
            .parse::<u64>()
            .ok()
            .and_then(|value| Self::try_new(value).ok())
            .ok_or_else(|| EdgarError::InvalidCik(s.to_string()))
    }
}

// company_tickers.json carries `cik_str` as a number, other feeds as a string.
impl<'de> Deserialize<'de> for Cik {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Self::try_new(value).map_err(serde::de::Error::custom),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Periodic report form types the resolvers look for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    /// Annual report
    #[serde(rename = "10-K")]
    TenK,
    /// Quarterly report
    #[serde(rename = "10-Q")]
    TenQ,
}

impl FormType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TenK => "10-K",
            Self::TenQ => "10-Q",
        }
    }

    /// Exact match against a `form` value; amendments such as `10-K/A` do not match
    pub fn matches(self, form: &str) -> bool {
        form == self.as_str()
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "10-K" | "10K" => Ok(Self::TenK),
            "10-Q" | "10Q" => Ok(Self::TenQ),
            other => Err(EdgarError::Config(format!("unsupported form type: {other}"))),
        }
    }
}

/// Calendar quarter of a filing date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Months covered by the quarter, 1-based
    pub const fn months(self) -> RangeInclusive<u32> {
        match self {
            Self::Q1 => 1..=3,
            Self::Q2 => 4..=6,
            Self::Q3 => 7..=9,
            Self::Q4 => 10..=12,
        }
    }

    pub fn contains_month(self, month: u32) -> bool {
        self.months().contains(&month)
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }
}

impl TryFrom<u8> for Quarter {
    type Error = EdgarError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            other => Err(EdgarError::InvalidQuarter(other)),
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cik_padding() {
        assert_eq!(Cik::new(320193).padded(), "0000320193");
        assert_eq!(Cik::new(320193).to_string(), "0000320193");
        assert_eq!(Cik::new(1).to_string(), "0000000001");
    }

    #[test]
    fn test_cik_parse() {
        assert_eq!("0000320193".parse::<Cik>().unwrap(), Cik::new(320193));
        assert_eq!("320193".parse::<Cik>().unwrap(), Cik::new(320193));
        assert_eq!(" 789019 ".parse::<Cik>().unwrap(), Cik::new(789019));

        assert!(matches!("".parse::<Cik>(), Err(EdgarError::InvalidCik(_))));
        assert!(matches!("AAPL".parse::<Cik>(), Err(EdgarError::InvalidCik(_))));
        assert!(matches!("-320193".parse::<Cik>(), Err(EdgarError::InvalidCik(_))));
        assert!("12345678901".parse::<Cik>().is_err());
    }

    #[test]
    fn test_cik_bound() {
        assert_eq!(Cik::try_new(9_999_999_999).unwrap().padded(), "9999999999");
        assert!(matches!(
            Cik::try_new(12_345_678_901),
            Err(EdgarError::InvalidCik(_))
        ));
        assert!(Cik::try_from(12_345_678_901_u64).is_err());
        assert_eq!(Cik::try_from(320193_u64).unwrap(), Cik::new(320193));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "CIK exceeds 10 digits")]
    fn test_cik_new_checks_bound_in_debug() {
        let _ = Cik::new(12_345_678_901);
    }

    #[test]
    fn test_cik_deserialize_rejects_wide_numbers() {
        assert!(serde_json::from_str::<Cik>("12345678901").is_err());
        assert!(serde_json::from_str::<Cik>("\"12345678901\"").is_err());
    }

    #[test]
    fn test_cik_deserialize_number_or_string() {
        let from_number: Cik = serde_json::from_str("320193").unwrap();
        let from_string: Cik = serde_json::from_str("\"0000320193\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<Cik>("\"apple\"").is_err());
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "320193");
    }

    #[test]
    fn test_form_type() {
        assert_eq!(FormType::TenK.as_str(), "10-K");
        assert_eq!(FormType::TenQ.as_str(), "10-Q");
        assert!(FormType::TenK.matches("10-K"));
        assert!(!FormType::TenK.matches("10-K/A"));
        assert!(!FormType::TenQ.matches("10-K"));
        assert_eq!("10-q".parse::<FormType>().unwrap(), FormType::TenQ);
        assert_eq!("10K".parse::<FormType>().unwrap(), FormType::TenK);
        assert!("8-K".parse::<FormType>().is_err());
    }

    #[test]
    fn test_quarter_months() {
        assert!(Quarter::Q1.contains_month(1));
        assert!(Quarter::Q1.contains_month(3));
        assert!(!Quarter::Q1.contains_month(4));
        assert!(Quarter::Q2.contains_month(6));
        assert!(Quarter::Q3.contains_month(7));
        assert!(Quarter::Q4.contains_month(12));
        assert!(!Quarter::Q4.contains_month(9));
    }

    #[test]
    fn test_quarter_try_from() {
        assert_eq!(Quarter::try_from(2).unwrap(), Quarter::Q2);
        assert_eq!(Quarter::Q3.to_string(), "Q3");
        assert!(matches!(Quarter::try_from(0), Err(EdgarError::InvalidQuarter(0))));
        assert!(matches!(Quarter::try_from(5), Err(EdgarError::InvalidQuarter(5))));
    }
}
