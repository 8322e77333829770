//! `delta-round-trip`: one market buy/sell cycle on a random tradable product.
//!
//! Reads `DELTA_*` variables (a `.env` file is loaded first when present) and
//! logs through `RUST_LOG`, defaulting to `info`.

use delta_sdk::client::DeltaClient;
use delta_sdk::config::ClientConfig;
use delta_sdk::round_trip::{run_round_trip, RoundTripConfig, RoundTripError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found, using process environment");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    tracing::info!(base_url = %config.base_url, "Starting round trip");

    let client = match DeltaClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build client");
            return ExitCode::from(2);
        }
    };

    let mut rng = StdRng::from_entropy();
    match run_round_trip(&client, &RoundTripConfig::default(), &mut rng).await {
        Ok(report) => {
            tracing::info!(
                symbol = %report.product.symbol,
                size = %report.size,
                buy_id = report.buy.id,
                sell_id = report.sell.id,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(RoundTripError::Sell { symbol, buy, source }) => {
            tracing::error!(
                %symbol,
                buy_id = buy.id,
                error = %source,
                "Sell failed; close the position manually"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, retryable = is_retryable(&e), "Round trip failed");
            ExitCode::FAILURE
        }
    }
}

fn is_retryable(err: &RoundTripError) -> bool {
    match err {
        RoundTripError::ListProducts(e) | RoundTripError::Buy { source: e, .. } => {
            e.is_retryable()
        }
        _ => false,
    }
}
