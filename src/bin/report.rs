//! Fetch-and-display run against the sample app id.
//!
//! Takes no arguments; the app id is fixed so the binary doubles as a quick
//! end-to-end check of the SDK against the live storefront.

use steamstore_sdk::{config, report, SteamStoreSdk};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> steamstore_sdk::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let sdk = SteamStoreSdk::builder().build()?;

    eprintln!("Fetching listing for app id {}", config::SAMPLE_APP_ID);
    let aggregated = sdk.apps().aggregate(config::SAMPLE_APP_ID).await;

    if aggregated.is_none() {
        eprintln!("No data available for app id {}", config::SAMPLE_APP_ID);
    }
    report::print(aggregated.as_ref())?;

    Ok(())
}
