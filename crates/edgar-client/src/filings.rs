//! Filing history records and period matching
//!
//! The submissions API delivers filings as parallel arrays (`accessionNumber`,
//! `form`, `filingDate`, ...), one array per field. They are converted into
//! one [`Filing`] per position as soon as they are decoded, so everything past
//! this module works on whole records.

use crate::config::DateMatching;
use crate::error::{EdgarError, Result};
use crate::model::{Cik, FormType, Quarter};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single filing from a company's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filing {
    /// Accession number, e.g. `0000320193-25-000050`
    pub accession_number: String,
    /// Form type as reported (`10-K`, `10-Q`, `8-K`, `10-K/A`, ...)
    pub form: String,
    /// Filing date, `YYYY-MM-DD`
    pub filing_date: String,
    /// Period of report, when the provider gives one
    pub report_date: Option<String>,
    /// Primary document filename inside the accession folder
    pub primary_document: String,
    pub primary_doc_description: Option<String>,
}

impl Filing {
    /// Accession number without hyphens, as used in archive paths
    pub fn accession_path(&self) -> String {
        self.accession_number.replace('-', "")
    }

    pub fn is_form(&self, form: FormType) -> bool {
        form.matches(&self.form)
    }

    /// Archive URL of the primary document
    pub fn document_url(&self, archives_base_url: &str, cik: Cik) -> String {
        filing_url(
            archives_base_url,
            cik,
            &self.accession_number,
            &self.primary_document,
        )
    }

    /// Whether the filing date falls in `year`, and in `quarter` when given
    pub fn filed_in(&self, year: i32, quarter: Option<Quarter>, mode: DateMatching) -> bool {
        match mode {
            DateMatching::Prefix => prefix_match(&self.filing_date, year, quarter),
            DateMatching::Parsed => parsed_match(&self.filing_date, year, quarter),
        }
    }
}

/// `{base}/{cik:010}/{accession without '-'}/{document}`
pub fn filing_url(
    archives_base_url: &str,
    cik: Cik,
    accession_number: &str,
    document: &str,
) -> String {
    format!(
        "{}/{}/{}/{}",
        archives_base_url.trim_end_matches('/'),
        cik.padded(),
        accession_number.replace('-', ""),
        document
    )
}

/// First filing of `form` filed in the requested period, in the order given
///
/// Order is the provider's; no sorting by date is applied.
pub fn first_match(
    filings: &[Filing],
    form: FormType,
    year: i32,
    quarter: Option<Quarter>,
    mode: DateMatching,
) -> Option<&Filing> {
    filings
        .iter()
        .find(|filing| filing.is_form(form) && filing.filed_in(year, quarter, mode))
}

fn prefix_match(filing_date: &str, year: i32, quarter: Option<Quarter>) -> bool {
    if !filing_date.starts_with(&format!("{year:04}")) {
        return false;
    }
    let Some(quarter) = quarter else {
        return true;
    };

    match filing_date.get(5..7).filter(|m| m.bytes().all(|b| b.is_ascii_digit())) {
        Some(month) => month.parse::<u32>().is_ok_and(|m| quarter.contains_month(m)),
        None => {
            debug!(filing_date, "Skipping filing with unreadable month");
            false
        }
    }
}

fn parsed_match(filing_date: &str, year: i32, quarter: Option<Quarter>) -> bool {
    match NaiveDate::parse_from_str(filing_date, "%Y-%m-%d") {
        Ok(date) => date.year() == year && quarter.is_none_or(|q| q.contains_month(date.month())),
        Err(e) => {
            debug!(filing_date, error = %e, "Skipping filing with unparseable date");
            false
        }
    }
}

/// Parallel-array form of a filing list, as sent by the submissions API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    pub accession_number: Vec<String>,
    pub form: Vec<String>,
    pub filing_date: Vec<String>,
    pub primary_document: Vec<String>,
    #[serde(default)]
    pub report_date: Vec<Option<String>>,
    #[serde(default)]
    pub primary_doc_description: Vec<Option<String>>,
}

impl RecentFilings {
    /// Zip the arrays into records, rejecting arrays of unequal length
    pub fn into_filings(self) -> Result<Vec<Filing>> {
        let Self {
            accession_number,
            form,
            filing_date,
            primary_document,
            report_date,
            primary_doc_description,
        } = self;

        let len = accession_number.len();
        for (name, other) in [
            ("form", form.len()),
            ("filingDate", filing_date.len()),
            ("primaryDocument", primary_document.len()),
        ] {
            if other != len {
                return Err(EdgarError::MalformedFilings(format!(
                    "{name} has {other} entries but accessionNumber has {len}"
                )));
            }
        }

        let mut report_dates = report_date.into_iter();
        let mut descriptions = primary_doc_description.into_iter();

        Ok(accession_number
            .into_iter()
            .zip(form)
            .zip(filing_date)
            .zip(primary_document)
            .map(|(((accession_number, form), filing_date), primary_document)| Filing {
                accession_number,
                form,
                filing_date,
                report_date: non_empty(report_dates.next()),
                primary_document,
                primary_doc_description: non_empty(descriptions.next()),
            })
            .collect())
    }
}

fn non_empty(value: Option<Option<String>>) -> Option<String> {
    value.flatten().filter(|v| !v.is_empty())
}

/// Older filing page listed under `filings.files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingArchive {
    /// File name relative to the submissions base, e.g. `CIK0000320193-submissions-001.json`
    pub name: String,
    #[serde(default)]
    pub filing_count: u64,
    #[serde(default)]
    pub filing_from: String,
    #[serde(default)]
    pub filing_to: String,
}

/// The `filings` object of a submissions document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filings {
    /// Most recent filings, provider order
    pub recent: Vec<Filing>,
    /// Older filing pages not included in `recent`
    pub files: Vec<FilingArchive>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFilings {
    recent: RecentFilings,
    #[serde(default)]
    files: Vec<FilingArchive>,
}

impl TryFrom<RawFilings> for Filings {
    type Error = EdgarError;

    fn try_from(raw: RawFilings) -> Result<Self> {
        Ok(Self {
            recent: raw.recent.into_filings()?,
            files: raw.files,
        })
    }
}

/// Envelope of `CIK##########.json`; only `filings` is read
#[derive(Debug, Deserialize)]
pub(crate) struct Submissions {
    pub(crate) filings: RawFilings,
}

impl Filings {
    /// Decode the `filings` object out of a full submissions document
    pub fn from_submissions_json(body: &str) -> Result<Self> {
        let submissions: Submissions = serde_json::from_str(body)?;
        submissions.filings.try_into()
    }
}
