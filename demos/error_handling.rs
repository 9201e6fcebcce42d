//! Example: Matching on SwapError kinds.
//!
//! Run with: cargo run --example error_handling

use std::time::Duration;

use zos_swap_client::SwapError;
use zos_swap_client::error::error_codes;
use zos_swap_client::swap::SwapClient;

fn describe(err: &SwapError) {
    match err {
        SwapError::Api { status, code, .. } => {
            if err.has_code(error_codes::INVALID_PARAMS) {
                println!("Backend rejected the parameters");
            }
            println!("Rejected ({status}): {} code={code:?}", err.message());
        }
        SwapError::Network => println!("Unreachable: {}", err.message()),
        SwapError::Request(_) => println!("Not sent: {}", err.message()),
    }
}

#[tokio::main]
async fn main() -> Result<(), SwapError> {
    let api_error = SwapError::from_response(
        reqwest::StatusCode::BAD_REQUEST,
        r#"{"message":"Invalid parameters","code":"INVALID_PARAMS"}"#,
    );
    describe(&api_error);

    // Nothing listens on port 9 locally; a tiny timeout keeps this quick
    let client = SwapClient::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_millis(200))
        .build()?;
    if let Err(err) = client.get_currencies().await {
        describe(&err);
    }

    // Rejected before any request is made
    if let Err(err) = SwapClient::builder().base_url("not a url").build() {
        describe(&err);
    }

    Ok(())
}
