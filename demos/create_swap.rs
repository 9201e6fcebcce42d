//! Example: Creating a swap and polling its status.
//!
//! Requires ZOS_AUTH_TOKEN. Run with:
//! ZOS_AUTH_TOKEN=... cargo run --example create_swap -- <recipient-address>

use std::time::Duration;

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use zos_swap_client::auth::EnvToken;
use zos_swap_client::swap::{CreateExchangeRequest, SwapClient, SwapClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let recipient = std::env::args()
        .nth(1)
        .ok_or("usage: create_swap <recipient-address>")?;
    let token = EnvToken::try_from_env().ok_or("ZOS_AUTH_TOKEN is not set")?;

    let client = SwapClient::from_config(SwapClientConfig::from_env()?)?;
    client.set_auth_token(token);

    let request = CreateExchangeRequest::new("zec", "sol", Decimal::ONE, recipient);
    let created = client.create_exchange(&request).await?;
    println!(
        "Swap {} created: send {} {} to {}",
        created.swap.id, created.exchange.amount, created.swap.from_currency,
        created.exchange.deposit_address
    );

    loop {
        let status = client.get_exchange_status(&created.swap.id).await?;
        println!("status: {}", status.status);
        if status.status.is_terminal() {
            break;
        }
        tokio::time::sleep(Duration::from_secs(15)).await;
    }

    let swap = client.get_swap_details(&created.swap.id).await?;
    println!("Final: {:?}", swap);
    Ok(())
}
