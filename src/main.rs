//! Smoke-check entry point
//!
//! Attaches to a real automation endpoint, drives a short standard-mode
//! scenario against the application under test, and reports the outcome.
//! The actual suites live under `tests/` and run against the simulated
//! application; this binary exists to validate a live endpoint.

use anyhow::Context;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use calcdriver::config::Config;
use calcdriver::pages::StandardCalculatorPage;
use calcdriver::session::CalculatorSession;
use calcdriver::wire::WireClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("calcdriver smoke check v{}", calcdriver::VERSION);

    // Load configuration: file argument wins over environment
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path)?,
        None => Config::from_env()?,
    };
    info!(
        "Endpoint: {}, application: {}",
        config.endpoint, config.app
    );

    let client = Arc::new(WireClient::new(&config.endpoint, config.command_timeout)?);
    let session = CalculatorSession::setup(&config, client)
        .await
        .context("could not open a session against the endpoint")?;

    let page = StandardCalculatorPage::new(session.clone());
    let outcome = smoke(&page).await;

    session.teardown().await?;
    outcome
}

async fn smoke(page: &StandardCalculatorPage) -> anyhow::Result<()> {
    page.ensure_standard_mode().await?;
    page.ensure_result_text_is_zero().await?;

    page.operators.number_pad.input(2.0).await?;
    page.operators.plus_button().click().await?;
    page.operators.number_pad.input(3.0).await?;
    page.operators.equal_button().click().await?;

    let result = page.results.result_text().await?;
    anyhow::ensure!(result == "5", "expected 5, display shows {}", result);

    page.clear_all().await?;
    info!("Smoke check passed: 2 + 3 = {}", result);
    Ok(())
}
