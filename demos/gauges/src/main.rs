//! Issuance gauge example: compute the yearly issuance and the dial reading.
//!
//! Usage: gauges <pos_issuance_per_day> <pow_issuance_per_day> <simulate_merge> <eth|usd> [average_eth_price_usd] [eth_price_usd] [config.json]

use anyhow::{Context, Result};
use gauges::{issuance_per_day, issuance_per_year, Gauge, GaugeConfig, Unit};

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
    if args.len() < 5 {
        eprintln!(
            "Usage: {} <pos_issuance_per_day> <pow_issuance_per_day> <simulate_merge> <eth|usd> [average_eth_price_usd] [eth_price_usd] [config.json]",
            args.first().map(|s| s.as_str()).unwrap_or("gauges")
        );
        std::process::exit(1);
    }

    let pos = parse_f64("pos issuance", &args[1])?;
    let pow = parse_f64("pow issuance", &args[2])?;
    let simulate_merge = args[3]
        .trim()
        .parse::<bool>()
        .with_context(|| format!("invalid simulate_merge: {}", args[3]))?;
    let unit: Unit = args[4].trim().parse()?;
    let average_price = args
        .get(5)
        .map(|v| parse_f64("average eth price", v))
        .transpose()?;
    let eth_price = args
        .get(6)
        .map(|v| parse_f64("eth price", v))
        .transpose()?;
    let config = match args.get(7) {
        Some(path) => GaugeConfig::from_file(path.trim())?,
        None => GaugeConfig::default(),
    };

    let per_day = issuance_per_day(pos, pow, simulate_merge);
    let per_year = issuance_per_year(&config, per_day, unit, average_price);
    let gauge = Gauge::new(&config, unit, per_year, eth_price);
    tracing::info!(per_day, ?per_year, max = gauge.max, "issuance gauge evaluated");

    println!(
        "issuance: {} {}",
        gauge.readout().as_deref().unwrap_or("loading"),
        unit.per_year_label()
    );
    println!("dial max: {}{}", gauge.max, unit.gauge_suffix());
    println!("progress: {:.3}", gauge.progress);
    Ok(())
}
