use chrono::NaiveDate;
use thetadata::types::{OptionContract, OptionRight, date_at_time, market_open};
use thetadata::{Config, ThetaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly logging with env-based filtering.
    // Suggested: RUST_LOG=info,thetadata=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // Requires a ThetaData terminal listening on the default local port.
    let client = ThetaClient::connect(Config::default()).await?;

    let contract = OptionContract::new(
        "SPXW",
        NaiveDate::from_ymd_opt(2025, 2, 21).expect("valid date"),
        "6000".parse()?,
        OptionRight::Put,
    )?;

    println!("SPXW 20250221 $6000 PUT quotes 2/17/2025 - 2/21/2025 @ 10:00");
    let mut quotes =
        client
            .option()
            .quotes_at_time(&contract, 20250217, 20250221, "10:00:00")?;
    while let Some(quote) = quotes.next().await {
        let quote = quote?;
        println!("\t{} bid: {} ask: {}", quote.time, quote.bid, quote.ask);
    }

    let open = date_at_time(
        NaiveDate::from_ymd_opt(2025, 2, 20).expect("valid date"),
        market_open(),
    )
    .expect("valid session time")
        + chrono::Duration::minutes(30);

    let quote = client.option().quote_at_time(&contract, open).await?;
    println!("\nSPXW 20250221 $6000 PUT quote 2/20/2025 @ 10:00\n\t{quote:?}");

    println!("\nZBRA quotes 2/17/2025 - 2/21/2025 @ 10:00");
    let mut quotes = client
        .stock()
        .quotes_at_time("ZBRA", 20250217, 20250221, "10:00:00")?;
    while let Some(quote) = quotes.next().await {
        let quote = quote?;
        println!("\t{} bid: {} ask: {}", quote.time, quote.bid, quote.ask);
    }

    let trade = client.stock().trade_at_time("ZBRA", open).await?;
    println!("\nZBRA trade 2/20/2025 @ 10:00\n\t{trade:?}");

    Ok(())
}
