//! Price model example: seed the growth-profile slider from market figures and
//! print the implied ETH price.
//!
//! Usage: price-model <config.json> <burn_rate_usd_per_minute> <average_eth_price_usd> <eth_price_usd> <eth_supply_wei> [monetary_premium] [growth_position]

use std::str::FromStr;

use alloy::primitives::U256;
use anyhow::{anyhow, Context, Result};
use price_model::{MarketInputs, PriceModel, PriceModelConfig};

fn parse_f64(name: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid {}: {}", name, value))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 6 {
        eprintln!(
            "Usage: {} <config.json> <burn_rate_usd_per_minute> <average_eth_price_usd> <eth_price_usd> <eth_supply_wei> [monetary_premium] [growth_position]",
            args.first().map(|s| s.as_str()).unwrap_or("price-model")
        );
        std::process::exit(1);
    }

    let config = PriceModelConfig::from_file(args[1].trim())?;
    let inputs = MarketInputs {
        burn_rate_usd_per_minute: Some(parse_f64("burn rate", &args[2])?),
        average_eth_price_usd: Some(parse_f64("average eth price", &args[3])?),
        eth_price_usd: Some(parse_f64("eth price", &args[4])?),
        eth_supply_wei: Some(
            U256::from_str(args[5].trim()).map_err(|e| anyhow!("invalid eth supply: {}", e))?,
        ),
    };

    let mut model = PriceModel::new(&config)?;
    model.observe(inputs);
    if let Some(premium) = args.get(6) {
        model.set_monetary_premium(parse_f64("monetary premium", premium)?);
    }
    if let Some(position) = args.get(7) {
        model.set_growth_position(parse_f64("growth position", position)?);
    }
    tracing::info!(seeded = model.is_seeded(), "price model evaluated");

    let snapshot = model.snapshot();
    println!("{}", snapshot.to_message());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
