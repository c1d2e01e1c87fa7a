use litechart::api::{CandlestickOptions, LineOptions, LineStyle, PaneOptions};
use litechart::extensions::{
    MarkerPosition, MarkerShape, MarkerTooltip, PriceLineOptions, SeriesMarker,
    collect_marker_tooltips,
};
use litechart::{ChartError, ChartOptions, create_chart};
use serde_json::{Value, json};

#[test]
fn markers_are_sorted_by_time_and_replace_previous_set() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());

    series
        .set_markers(vec![SeriesMarker::new(
            1,
            MarkerPosition::InBar,
            MarkerShape::Circle,
        )])
        .expect("first markers");
    series
        .set_markers(vec![
            SeriesMarker::new(30, MarkerPosition::AboveBar, MarkerShape::ArrowDown).with_text("c"),
            SeriesMarker::new(10, MarkerPosition::BelowBar, MarkerShape::ArrowUp).with_text("a"),
            SeriesMarker::new(10, MarkerPosition::BelowBar, MarkerShape::Square).with_text("b"),
        ])
        .expect("second markers");

    let texts: Vec<_> = series
        .markers()
        .iter()
        .map(|marker| marker.text.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn invalid_markers_are_rejected_and_keep_previous_set() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());
    series
        .set_markers(vec![SeriesMarker::new(
            1,
            MarkerPosition::InBar,
            MarkerShape::Circle,
        )])
        .expect("markers");

    let err = series
        .set_markers(vec![
            SeriesMarker::new(2, MarkerPosition::InBar, MarkerShape::Circle).with_size(0.0),
        ])
        .expect_err("zero size");
    assert!(matches!(err, ChartError::InvalidOption(_)));

    let err = series
        .set_markers(vec![
            SeriesMarker::new(2, MarkerPosition::InBar, MarkerShape::Circle)
                .with_tooltip(MarkerTooltip::new("no id")),
        ])
        .expect_err("tooltip without id");
    assert!(matches!(err, ChartError::InvalidOption(_)));
    assert_eq!(series.markers().len(), 1);
}

#[test]
fn duplicate_marker_ids_are_rejected() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());

    let err = series
        .set_markers(vec![
            SeriesMarker::new(1, MarkerPosition::BelowBar, MarkerShape::ArrowUp)
                .with_id("entry")
                .with_tooltip(MarkerTooltip::new("First")),
            SeriesMarker::new(2, MarkerPosition::AboveBar, MarkerShape::ArrowDown)
                .with_id("entry")
                .with_tooltip(MarkerTooltip::new("Second")),
        ])
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidOption(message) if message.contains("entry")));
    assert!(series.markers().is_empty());
}

#[test]
fn markers_serialize_with_library_names() {
    let marker = SeriesMarker::new(5, MarkerPosition::AboveBar, MarkerShape::ArrowDown)
        .with_color("#ff0000")
        .with_id("sell-1")
        .with_tooltip(MarkerTooltip::new("Sell"));
    let value = serde_json::to_value(&marker).expect("marker json");
    assert_eq!(
        value,
        json!({
            "time": 5,
            "position": "aboveBar",
            "shape": "arrowDown",
            "color": "#ff0000",
            "id": "sell-1",
        })
    );
}

#[test]
fn tooltips_are_collected_per_pane() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let pane = chart.add_pane(PaneOptions::default()).expect("pane");
    pane.add_candlestick_series(CandlestickOptions::default())
        .set_markers(vec![
            SeriesMarker::new(10, MarkerPosition::BelowBar, MarkerShape::ArrowUp)
                .with_id("buy")
                .with_tooltip(MarkerTooltip::new("Buy").with_field("Qty", "2")),
            SeriesMarker::new(20, MarkerPosition::AboveBar, MarkerShape::ArrowDown).with_id("plain"),
        ])
        .expect("markers");

    let tooltips = collect_marker_tooltips(pane);
    assert_eq!(tooltips.len(), 1);
    assert_eq!(tooltips["buy"].title.as_deref(), Some("Buy"));
    assert_eq!(tooltips["buy"].fields["Qty"], "2");
}

#[test]
fn markers_price_lines_and_tooltips_reach_the_config() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());
    series.set_data(vec![[10.0, 1.0], [20.0, 2.0]]).expect("data");
    series
        .set_markers(vec![
            SeriesMarker::new(20, MarkerPosition::AboveBar, MarkerShape::Circle)
                .with_id("peak")
                .with_tooltip(MarkerTooltip::new("Peak").with_field("Value", "2.0")),
        ])
        .expect("markers");
    series
        .create_price_line(
            PriceLineOptions::new(1.5)
                .with_color("#888888")
                .with_line_style(LineStyle::Dotted)
                .with_title("mid"),
        )
        .expect("price line");

    let config: Value =
        serde_json::from_str(&chart.config_json().expect("config")).expect("json");
    let pane = &config["panes"][0];
    assert_eq!(pane["series"][0]["markers"][0]["id"], json!("peak"));
    assert!(pane["series"][0]["markers"][0].get("tooltip").is_none());
    assert_eq!(
        pane["series"][0]["priceLines"][0],
        json!({"price": 1.5, "color": "#888888", "lineStyle": 1, "title": "mid"})
    );
    assert_eq!(
        pane["tooltips"]["peak"],
        json!({"title": "Peak", "fields": {"Value": "2.0"}})
    );
}

#[test]
fn non_finite_price_line_is_rejected() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());
    let err = series
        .create_price_line(PriceLineOptions::new(f64::NAN))
        .expect_err("nan price");
    assert!(matches!(err, ChartError::InvalidOption(_)));
    assert!(series.price_lines().is_empty());
}
