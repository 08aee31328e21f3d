//! Company P/E markers placed along the growth-profile slider.

use serde::{Deserialize, Serialize};

use crate::scale::LogScale;

/// Trailing P/E ratios of the reference companies, keyed by ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CompanyPeRatios {
    pub amzn: f64,
    pub dis: f64,
    pub googl: f64,
    pub intc: f64,
    pub nflx: f64,
    pub tsla: f64,
}

/// A marker under the slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeMarker {
    /// Icon name, also used as the label
    pub icon: &'static str,
    /// Ticker symbol; `None` for ETH itself
    pub symbol: Option<&'static str>,
    pub pe_ratio: f64,
    /// Slider position in `[0, 1]`
    pub position: f64,
    /// Google Finance quote page
    pub link: Option<String>,
}

impl PeMarker {
    fn company(icon: &'static str, symbol: &'static str, pe_ratio: f64, scale: &LogScale) -> Self {
        Self {
            icon,
            symbol: Some(symbol),
            pe_ratio,
            position: scale.to_linear(pe_ratio),
            link: Some(quote_link(symbol)),
        }
    }

    fn eth(pe_ratio: f64, scale: &LogScale) -> Self {
        Self {
            icon: "eth",
            symbol: None,
            pe_ratio,
            position: scale.to_linear(pe_ratio),
            link: None,
        }
    }
}

fn quote_link(symbol: &str) -> String {
    let exchange = if symbol == "DIS" { "NYSE" } else { "NASDAQ" };
    format!("https://www.google.com/finance/quote/{}:{}", symbol, exchange)
}

/// Lays out the markers left to right.
///
/// GOOGL and AMZN sit next to ETH on the slider, so they are only shown once
/// the ETH P/E is known and at least `min_gap` away from it. NFLX is never shown.
pub(crate) fn layout(
    ratios: &CompanyPeRatios,
    eth_pe_ratio: Option<f64>,
    min_gap: f64,
    scale: &LogScale,
) -> Vec<PeMarker> {
    let mut markers = vec![PeMarker::company("intel", "INTC", ratios.intc, scale)];

    if let Some(eth_pe) = eth_pe_ratio {
        if eth_pe - ratios.googl > min_gap {
            markers.push(PeMarker::company("google", "GOOGL", ratios.googl, scale));
        }
        markers.push(PeMarker::eth(eth_pe, scale));
        if ratios.amzn - eth_pe > min_gap {
            markers.push(PeMarker::company("amazon", "AMZN", ratios.amzn, scale));
        }
    }

    markers.push(PeMarker::company("disney", "DIS", ratios.dis, scale));
    markers.push(PeMarker::company("tesla", "TSLA", ratios.tsla, scale));
    markers
}
