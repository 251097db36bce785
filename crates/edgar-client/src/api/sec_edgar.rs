//! SEC EDGAR API client for the company directory and filing lookups
//!
//! SEC EDGAR is the Electronic Data Gathering, Analysis, and Retrieval system
//! used by the U.S. Securities and Exchange Commission.
//!
//! User-Agent requirement: must include an application name and contact email.
//! No caching, retries or rate limiting are applied; every call issues exactly
//! one request.

use crate::config::EdgarConfig;
use crate::directory::CikDirectory;
use crate::error::{EdgarError, Result};
use crate::filings::{self, Filing, Filings, RecentFilings};
use crate::model::{Cik, FormType, Quarter};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// SEC EDGAR API client
///
/// Holds a snapshot of the CIK directory taken at construction; filing
/// histories are fetched fresh on every call.
#[derive(Debug)]
pub struct EdgarClient {
    client: Client,
    config: EdgarConfig,
    directory: CikDirectory,
    directory_error: Option<EdgarError>,
}

impl EdgarClient {
    /// Create a client and load the CIK directory
    ///
    /// A failed directory fetch does not fail construction: the name and
    /// ticker maps stay empty, a warning is logged and the failure is kept in
    /// [`directory_error`](Self::directory_error). Use [`connect`](Self::connect)
    /// to treat it as an error instead.
    ///
    /// # Example
    /// ```no_run
    /// use edgar_client::{EdgarClient, EdgarConfig, Quarter};
    ///
    /// # async fn run() -> edgar_client::Result<()> {
    /// let client = EdgarClient::new(EdgarConfig::new("MyApp admin@example.com")).await?;
    /// if let Some(cik) = client.cik_for_ticker("AAPL") {
    ///     let url = client.resolve_quarterly_filing(cik, 2025, Quarter::Q2).await?;
    ///     println!("{url:?}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: EdgarConfig) -> Result<Self> {
        let mut client = Self::without_directory(config)?;

        match client.fetch_directory().await {
            Ok(directory) => client.directory = directory,
            Err(e) => {
                warn!(
                    url = %client.config.directory_url,
                    error = %e,
                    "CIK directory unavailable, continuing with empty lookup tables"
                );
                client.directory_error = Some(e);
            }
        }

        Ok(client)
    }

    /// Create a client, failing if the CIK directory cannot be loaded
    pub async fn connect(config: EdgarConfig) -> Result<Self> {
        let mut client = Self::without_directory(config)?;
        client.directory = client.fetch_directory().await?;
        Ok(client)
    }

    fn without_directory(config: EdgarConfig) -> Result<Self> {
        config.validate()?;

        let user_agent = HeaderValue::from_str(config.user_agent.trim())
            .map_err(|e| EdgarError::Config(format!("invalid user agent header: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            config,
            directory: CikDirectory::default(),
            directory_error: None,
        })
    }

    /// Re-download the CIK directory
    ///
    /// On failure the previous snapshot is kept and the error returned.
    pub async fn refresh_directory(&mut self) -> Result<usize> {
        let directory = self.fetch_directory().await?;
        self.directory = directory;
        self.directory_error = None;
        Ok(self.directory.len())
    }

    #[instrument(skip(self), fields(url = %self.config.directory_url))]
    async fn fetch_directory(&self) -> Result<CikDirectory> {
        let body = self.get_text(&self.config.directory_url).await?;
        let directory = CikDirectory::from_json(&body).inspect_err(|e| {
            warn!(error = %e, "Failed to parse CIK directory");
        })?;
        info!(tickers = directory.len(), "Loaded CIK directory");
        Ok(directory)
    }

    /// Company title -> CIK
    pub fn name_to_cik(&self) -> &HashMap<String, Cik> {
        self.directory.by_name()
    }

    /// Ticker symbol -> CIK
    pub fn ticker_to_cik(&self) -> &HashMap<String, Cik> {
        self.directory.by_ticker()
    }

    pub fn cik_for_ticker(&self, ticker: &str) -> Option<Cik> {
        self.directory.cik_for_ticker(ticker)
    }

    pub fn cik_for_name(&self, name: &str) -> Option<Cik> {
        self.directory.cik_for_name(name)
    }

    pub fn directory(&self) -> &CikDirectory {
        &self.directory
    }

    /// Why the directory is empty, if loading it failed
    pub fn directory_error(&self) -> Option<&EdgarError> {
        self.directory_error.as_ref()
    }

    pub fn config(&self) -> &EdgarConfig {
        &self.config
    }

    /// Submissions document URL for a CIK
    pub fn submissions_url(&self, cik: Cik) -> String {
        format!("{}/CIK{}.json", self.submissions_base(), cik.padded())
    }

    fn submissions_base(&self) -> &str {
        self.config.submissions_base_url.trim_end_matches('/')
    }

    /// Archive URL of a filing's primary document
    pub fn filing_url(&self, cik: Cik, filing: &Filing) -> String {
        filing.document_url(&self.config.archives_base_url, cik)
    }

    /// Fetch a company's filing history (the `filings` object)
    #[instrument(skip_all, fields(cik = %cik))]
    pub async fn fetch_filings(&self, cik: Cik) -> Result<Filings> {
        let url = self.submissions_url(cik);
        let body = self.get_text(&url).await?;
        let filings = Filings::from_submissions_json(&body).inspect_err(|e| {
            warn!(%url, error = %e, "Failed to decode submissions");
        })?;
        debug!(
            recent = filings.recent.len(),
            archives = filings.files.len(),
            "Fetched filings"
        );
        Ok(filings)
    }

    /// Fetch one of the older filing pages listed in [`Filings::files`]
    #[instrument(skip(self))]
    pub async fn fetch_filing_page(&self, name: &str) -> Result<Vec<Filing>> {
        let url = format!(
            "{}/{}",
            self.submissions_base(),
            name.trim_start_matches('/')
        );
        let body = self.get_text(&url).await?;
        let page: RecentFilings = serde_json::from_str(&body)?;
        page.into_filings()
    }

    /// Recent filings, optionally restricted to one form, in provider order
    pub async fn list_filings(
        &self,
        cik: Cik,
        form: Option<FormType>,
        limit: Option<usize>,
    ) -> Result<Vec<Filing>> {
        let filings = self.fetch_filings(cik).await?;
        Ok(filings
            .recent
            .into_iter()
            .filter(|filing| form.is_none_or(|f| filing.is_form(f)))
            .take(limit.unwrap_or(usize::MAX))
            .collect())
    }

    /// URL of the first 10-K filed in `year`
    ///
    /// `Ok(None)` means the history was fetched and nothing matched.
    pub async fn resolve_annual_filing(&self, cik: Cik, year: i32) -> Result<Option<String>> {
        self.resolve(cik, FormType::TenK, year, None).await
    }

    /// URL of the first 10-Q filed in `year` during `quarter`
    pub async fn resolve_quarterly_filing(
        &self,
        cik: Cik,
        year: i32,
        quarter: Quarter,
    ) -> Result<Option<String>> {
        self.resolve(cik, FormType::TenQ, year, Some(quarter)).await
    }

    async fn resolve(
        &self,
        cik: Cik,
        form: FormType,
        year: i32,
        quarter: Option<Quarter>,
    ) -> Result<Option<String>> {
        let history = self.fetch_filings(cik).await?;
        let found = filings::first_match(
            &history.recent,
            form,
            year,
            quarter,
            self.config.date_matching,
        );

        if let Some(filing) = found {
            debug!(
                %cik,
                form = %form,
                accession = %filing.accession_number,
                filing_date = %filing.filing_date,
                "Resolved filing"
            );
        }

        Ok(found.map(|filing| self.filing_url(cik, filing)))
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url, error = %e, "SEC request failed");
            EdgarError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "SEC request returned error status");
            return Err(EdgarError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
