//! Command-line interface for edgar-rs
//!
//! # Usage
//!
//! ```bash
//! export EDGAR_USER_AGENT="MyApp admin@example.com"
//!
//! edgar lookup AAPL
//! edgar filings --ticker AAPL --form 10-Q --limit 5
//! edgar annual --ticker AAPL --year 2024
//! edgar quarterly --cik 320193 --year 2025 --quarter 2
//! ```

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use edgar_client::{Cik, DateMatching, EdgarClient, EdgarConfig, Filing, FormType, Quarter};
use serde_json::json;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "edgar")]
#[command(about = "Look up companies and 10-K/10-Q filings on SEC EDGAR", long_about = None)]
#[command(version)]
struct Cli {
    /// Identifying User-Agent with a contact email, e.g. "MyApp admin@example.com"
    #[arg(long, env = "EDGAR_USER_AGENT", global = true)]
    user_agent: Option<String>,

    /// Parse filing dates instead of matching the year prefix
    #[arg(long, global = true)]
    parsed_dates: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a ticker or exact company name to its CIK
    Lookup {
        /// Ticker symbol or company title
        query: String,
    },
    /// List recent filings
    Filings {
        #[command(flatten)]
        company: Company,
        /// Only show this form type (10-K or 10-Q)
        #[arg(long)]
        form: Option<FormType>,
        /// Maximum number of filings to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// URL of the first 10-K filed in a year
    Annual {
        #[command(flatten)]
        company: Company,
        #[arg(long)]
        year: i32,
    },
    /// URL of the first 10-Q filed in a year and quarter
    Quarterly {
        #[command(flatten)]
        company: Company,
        #[arg(long)]
        year: i32,
        /// Calendar quarter of the filing date, 1-4
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        quarter: u8,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Company {
    /// Central Index Key, with or without leading zeros
    #[arg(long)]
    cik: Option<Cik>,
    /// Ticker symbol
    #[arg(long)]
    ticker: Option<String>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<EdgarConfig> {
        let user_agent = self
            .user_agent
            .clone()
            .context("a User-Agent is required: pass --user-agent or set EDGAR_USER_AGENT")?;

        let date_matching = if self.parsed_dates {
            DateMatching::Parsed
        } else {
            DateMatching::Prefix
        };

        Ok(EdgarConfig::builder()
            .user_agent(user_agent)
            .request_timeout(Duration::from_secs(self.timeout))
            .date_matching(date_matching)
            .build()?)
    }
}

fn resolve_cik(client: &EdgarClient, company: &Company) -> anyhow::Result<Cik> {
    if let Some(cik) = company.cik {
        return Ok(cik);
    }
    let ticker = company.ticker.as_deref().unwrap_or_default();

    if let Some(cik) = client.cik_for_ticker(ticker) {
        return Ok(cik);
    }
    if let Some(err) = client.directory_error() {
        bail!("cannot resolve ticker {ticker}: company directory unavailable ({err})");
    }
    bail!("unknown ticker: {ticker}")
}

fn print_url(json: bool, what: &str, url: Option<String>) {
    if json {
        println!("{}", json!({ "query": what, "url": url }));
        return;
    }
    match url {
        Some(url) => println!("{url}"),
        None => println!("No {what} found"),
    }
}

fn print_filings(
    json: bool,
    client: &EdgarClient,
    cik: Cik,
    filings: &[Filing],
) -> anyhow::Result<()> {
    if json {
        let rows: Vec<_> = filings
            .iter()
            .map(|f| json!({ "filing": f, "url": client.filing_url(cik, f) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Form", "Filed", "Accession", "Document"]);
    for filing in filings {
        table.add_row(vec![
            filing.form.as_str(),
            filing.filing_date.as_str(),
            filing.accession_number.as_str(),
            filing.primary_document.as_str(),
        ]);
    }
    println!("CIK {cik}");
    println!("{table}");
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = EdgarClient::new(cli.config()?).await?;

    match &cli.command {
        Command::Lookup { query } => {
            let cik = client
                .cik_for_ticker(query)
                .or_else(|| client.cik_for_name(query));
            if cik.is_none() {
                if let Some(err) = client.directory_error() {
                    bail!("company directory unavailable: {err}");
                }
            }

            if cli.json {
                println!("{}", json!({ "query": query, "cik": cik.map(Cik::padded) }));
            } else {
                match cik {
                    Some(cik) => println!("{query} -> {cik}"),
                    None => println!("No company found for {query}"),
                }
            }
        }
        Command::Filings {
            company,
            form,
            limit,
        } => {
            let cik = resolve_cik(&client, company)?;
            let filings = client.list_filings(cik, *form, Some(*limit)).await?;
            print_filings(cli.json, &client, cik, &filings)?;
        }
        Command::Annual { company, year } => {
            let cik = resolve_cik(&client, company)?;
            let url = client.resolve_annual_filing(cik, *year).await?;
            print_url(cli.json, &format!("10-K for {year}"), url);
        }
        Command::Quarterly {
            company,
            year,
            quarter,
        } => {
            let cik = resolve_cik(&client, company)?;
            let quarter = Quarter::try_from(*quarter)?;
            let url = client.resolve_quarterly_filing(cik, *year, quarter).await?;
            print_url(cli.json, &format!("10-Q for {year} {quarter}"), url);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    edgar_utils::init_tracing_with("warn,edgar_client=info");

    let cli = Cli::parse();
    info!(command = ?cli.command, "Starting edgar");

    run(cli).await
}
