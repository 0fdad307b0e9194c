use thetadata::types::{Interval, TradingHours};
use thetadata::{Config, ThetaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // Requires a ThetaData terminal listening on the default local port.
    let client = ThetaClient::connect(Config::default()).await?;

    let symbols = client.option().symbols().await?;
    println!("{} option roots available", symbols.len());

    println!("\nSPX 5-minute levels 2/18/2025 - 2/21/2025 (regular hours)");
    let mut prices = client.index().historical_prices(
        "SPX",
        20250218,
        20250221,
        Interval::FiveMinutes,
        TradingHours::Regular,
    )?;
    while let Some(price) = prices.next().await {
        let price = price?;
        println!("\t{} {}", price.time, price.price);
    }

    Ok(())
}
