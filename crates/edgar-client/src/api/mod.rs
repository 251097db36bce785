//! HTTP client for the SEC EDGAR endpoints

pub mod sec_edgar;

pub use sec_edgar::EdgarClient;
