//! Example: Listing currencies and quoting a pair.
//!
//! Run with: cargo run --example currencies

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use zos_swap_client::swap::{SwapClient, SwapClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Honour ZOS_SWAP_BASE_URL / ZOS_SWAP_TIMEOUT_MS if set
    let client = SwapClient::from_config(SwapClientConfig::from_env()?)?;

    println!("=== Currencies ===");
    let currencies = client.get_currencies().await?;
    for currency in currencies.iter().filter(|c| c.is_active).take(10) {
        println!("{:>8} {:<24} network={}", currency.symbol, currency.name, currency.network);
    }

    println!("\n=== Range zec -> sol ===");
    let range = client.get_exchange_range("zec", "sol").await?;
    match range.max {
        Some(max) => println!("min={} max={}", range.min, max),
        None => println!("min={} (no max)", range.min),
    }

    println!("\n=== Estimate 1 zec -> sol ===");
    let estimate = client.get_exchange_rate("zec", "sol", Decimal::ONE).await?;
    println!(
        "rate={} you get={} fee={} network fee={}",
        estimate.rate, estimate.estimated_amount, estimate.total_fee, estimate.network_fee
    );
    if let Some(warning) = &estimate.warning {
        println!("warning: {warning}");
    }

    Ok(())
}
