//! SEC EDGAR client
//!
//! This crate looks up companies and their periodic filings on the SEC EDGAR
//! public data endpoints. It includes:
//!
//! - The company ticker directory, indexed by company name and by ticker
//! - Filing history retrieval for a CIK (`data.sec.gov/submissions`)
//! - Resolution of the first 10-K for a year, or 10-Q for a year and quarter,
//!   to the archive URL of its primary document
//!
//! Transport failures are returned as [`EdgarError`]; a lookup that simply
//! finds nothing is `Ok(None)`.
//!
//! # Example
//!
//! ```rust,no_run
//! use edgar_client::{EdgarClient, EdgarConfig, Quarter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EdgarConfig::builder()
//!         .user_agent("MyApp admin@example.com")
//!         .build()?;
//!
//!     let client = EdgarClient::new(config).await?;
//!
//!     let cik = client.cik_for_ticker("AAPL").expect("AAPL is listed");
//!     let annual = client.resolve_annual_filing(cik, 2024).await?;
//!     let quarterly = client.resolve_quarterly_filing(cik, 2025, Quarter::Q2).await?;
//!
//!     println!("{annual:?}\n{quarterly:?}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod filings;
pub mod model;

// Re-export main types for convenience
pub use api::EdgarClient;
pub use config::{DateMatching, EdgarConfig};
pub use directory::CikDirectory;
pub use error::{EdgarError, Result};
pub use filings::{Filing, FilingArchive, Filings};
pub use model::{Cik, FormType, Quarter};
