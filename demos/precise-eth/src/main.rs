//! Precise ETH example: split a wei amount into its display windows and print
//! the frames of a count-up towards it.
//!
//! Usage: precise-eth <wei_amount> [previous_wei_amount]

use anyhow::Result;
use precise_eth::{EthSegments, SegmentsTween};

const FRAMES: u32 = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <wei_amount> [previous_wei_amount]",
            args.first().map(|s| s.as_str()).unwrap_or("precise-eth")
        );
        std::process::exit(1);
    }

    let target: EthSegments = args[1].trim().parse()?;
    let tween = match args.get(2) {
        Some(previous) => SegmentsTween::new(previous.trim().parse()?, target),
        None => SegmentsTween::settled(target),
    };
    tracing::info!(amount = %target.to_wei_string(), "split amount");

    println!("whole:         {}", target.whole_formatted());
    println!("high fraction: {}", target.high_fraction_formatted());
    println!("low fraction:  {}", target.low_fraction_formatted());
    println!("display:       {} ETH", target);
    println!("---");
    for frame in 0..=FRAMES {
        let progress = f64::from(frame) / f64::from(FRAMES);
        let shown = tween.value_at(progress);
        println!(
            "{:>4.0}%  {}.{} {}",
            progress * 100.0,
            shown.whole_formatted(),
            shown.high_fraction_formatted(),
            shown.low_fraction_formatted()
        );
    }

    Ok(())
}
