//! Resolve Apple's latest annual and quarterly filing URLs
//!
//! ```bash
//! export EDGAR_USER_AGENT="MyApp admin@example.com"
//! cargo run --example resolve_filings -p edgar-client
//! ```

use edgar_client::{EdgarClient, EdgarConfig, Quarter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,edgar_client=debug".to_string()),
        )
        .init();

    let config = EdgarConfig::from_env()?;
    let client = EdgarClient::connect(config).await?;

    let Some(cik) = client.cik_for_ticker("AAPL") else {
        println!("AAPL is not in the SEC ticker directory");
        return Ok(());
    };
    println!("AAPL -> CIK {cik}");

    match client.resolve_annual_filing(cik, 2024).await? {
        Some(url) => println!("10-K 2024: {url}"),
        None => println!("10-K 2024: not found"),
    }

    match client.resolve_quarterly_filing(cik, 2025, Quarter::Q2).await? {
        Some(url) => println!("10-Q 2025 Q2: {url}"),
        None => println!("10-Q 2025 Q2: not found"),
    }

    Ok(())
}
