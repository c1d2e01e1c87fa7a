//! Candlesticks over a volume pane, written as a standalone HTML page.
//!
//! Point `LITECHART_LIBRARY_PATH` at a `lightweight-charts.standalone.production.js`
//! build before running:
//!
//! ```text
//! LITECHART_LIBRARY_PATH=/path/to/lightweight-charts.js \
//!     cargo run --example candles_with_volume --features telemetry
//! ```

use litechart::api::{CandlestickOptions, HistogramOptions, PaneOptions, Theme};
use litechart::extensions::{MarkerPosition, MarkerShape, MarkerTooltip, SeriesMarker};
use litechart::render::RenderConfig;
use litechart::{ChartOptions, ChartResult, create_chart, row};

fn main() -> ChartResult<()> {
    let _ = litechart::telemetry::init_default_tracing();

    let mut chart = create_chart(ChartOptions::new(960, 600).with_theme(Theme::Dark))?;

    let mut rows = Vec::new();
    let mut volume = Vec::new();
    let mut close = 100.0_f64;
    for day in 0..60_i64 {
        let time = 1_609_459_200 + day * 86_400;
        let open = close;
        close = open + ((day * 7 % 11) as f64 - 5.0) * 0.8;
        let high = open.max(close) + 1.5;
        let low = open.min(close) - 1.5;
        rows.push(row! {
            "time" => time,
            "open" => open,
            "high" => high,
            "low" => low,
            "close" => close,
        });
        let color = if close >= open { "#26a69a" } else { "#ef5350" };
        volume.push(row! {
            "time" => time,
            "value" => 1_000.0 + (day % 9) as f64 * 150.0,
            "color" => color,
        });
    }

    let price = chart
        .add_pane(PaneOptions::with_height_ratio(3.0))?
        .add_candlestick_series(CandlestickOptions::default().with_title("DEMO"));
    price.set_data(rows)?;
    price.set_markers(vec![
        SeriesMarker::new(1_609_459_200 + 20 * 86_400, MarkerPosition::BelowBar, MarkerShape::ArrowUp)
            .with_text("Buy")
            .with_id("entry")
            .with_tooltip(MarkerTooltip::new("Entry").with_field("Size", "10")),
    ])?;

    chart
        .add_pane(PaneOptions::with_height_ratio(1.0))?
        .add_histogram_series(HistogramOptions::default())
        .set_data(volume)?;

    let path = chart.show_browser(&RenderConfig::from_env().with_title("Candles with volume"))?;
    println!("wrote {}", path.display());
    Ok(())
}
