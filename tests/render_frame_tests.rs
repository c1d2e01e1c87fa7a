use approx::assert_relative_eq;
use litechart::api::{CandlestickOptions, HistogramOptions, LineOptions, PaneOptions};
use litechart::render::{NullRenderer, RenderFrame, pane_heights};
use litechart::{Chart, ChartError, ChartOptions, create_chart};
use serde_json::{Value, json};

fn candles() -> Vec<[f64; 6]> {
    vec![
        [1_609_459_200.0, 100.0, 105.0, 95.0, 102.0, 1_000.0],
        [1_609_545_600.0, 102.0, 108.0, 101.0, 107.0, 1_200.0],
    ]
}

fn two_pane_chart() -> Chart {
    let mut chart = create_chart(ChartOptions::new(800, 600)).expect("chart");
    chart
        .add_pane(PaneOptions::with_height_ratio(3.0))
        .expect("price pane")
        .add_candlestick_series(CandlestickOptions::default())
        .set_data(candles())
        .expect("candles");
    chart
        .add_pane(PaneOptions::with_height_ratio(1.0))
        .expect("volume pane")
        .add_histogram_series(HistogramOptions::default())
        .set_data(vec![[1_609_459_200.0, 1_000.0], [1_609_545_600.0, 1_200.0]])
        .expect("volume");
    chart
}

fn config_value(chart: &Chart) -> Value {
    serde_json::from_str(&chart.config_json().expect("config json")).expect("valid json")
}

#[test]
fn chart_without_panes_is_render_error() {
    let chart = create_chart(ChartOptions::default()).expect("chart");
    let err = RenderFrame::build(&chart).expect_err("no panes");
    assert!(matches!(err, ChartError::Render(_)));

    let mut renderer = NullRenderer::default();
    let err = chart.render_with(&mut renderer).expect_err("no panes");
    assert!(matches!(err, ChartError::Render(_)));
}

#[test]
fn empty_pane_is_render_error() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    chart.add_line_series(LineOptions::default());
    chart.add_pane(PaneOptions::default()).expect("empty pane");

    let err = chart.config_json().expect_err("empty pane");
    match err {
        ChartError::Render(message) => assert!(message.contains("pane 1"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn series_without_data_still_renders() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    chart.add_line_series(LineOptions::default());
    let config = config_value(&chart);
    assert_eq!(config["panes"][0]["series"][0]["data"], json!([]));
}

#[test]
fn config_document_describes_every_pane_and_series() {
    let chart = two_pane_chart();
    let config = config_value(&chart);

    assert_eq!(config["schemaVersion"], json!(1));
    assert_eq!(config["width"], json!(800));
    assert_eq!(config["height"], json!(600));
    assert_eq!(config["syncTimeScales"], json!(true));

    let panes = config["panes"].as_array().expect("panes");
    assert_eq!(panes.len(), 2);
    assert_eq!(panes[0]["series"][0]["type"], json!("Candlestick"));
    assert_eq!(panes[1]["series"][0]["type"], json!("Histogram"));
    assert_eq!(
        panes[0]["series"][0]["data"][1],
        json!({"time": 1_609_545_600, "open": 102.0, "high": 108.0, "low": 101.0, "close": 107.0, "volume": 1_200.0})
    );
    assert_eq!(panes[1]["series"][0]["data"][0], json!({"time": 1_609_459_200, "value": 1_000.0}));
    assert_eq!(panes[0]["series"][0]["options"]["upColor"], json!("#26a69a"));
}

#[test]
fn pane_heights_follow_ratios_and_fill_the_chart() {
    let chart = two_pane_chart();
    let frame = RenderFrame::build(&chart).expect("frame");
    let panes = &frame.document().panes;

    assert_eq!(panes[0].height, 450);
    assert_eq!(panes[1].height, 150);
    assert_eq!(panes[0].chart_options["height"], json!(450));
    assert_eq!(panes[1].chart_options["width"], json!(800));

    let share = f64::from(panes[0].height) / f64::from(frame.viewport().height);
    assert_relative_eq!(share, 0.75, epsilon = 1e-12);
}

#[test]
fn only_the_bottom_pane_shows_the_time_axis() {
    let config = config_value(&two_pane_chart());
    assert_eq!(
        config["panes"][0]["chartOptions"]["timeScale"]["visible"],
        json!(false)
    );
    assert!(config["panes"][1]["chartOptions"].get("timeScale").is_none());
}

#[test]
fn single_pane_keeps_its_time_axis() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    chart
        .add_line_series(LineOptions::default())
        .set_data(vec![[1.0, 1.0]])
        .expect("data");
    let config = config_value(&chart);
    assert!(config["panes"][0]["chartOptions"].get("timeScale").is_none());
    assert_eq!(config["panes"][0]["height"], json!(600));
}

#[test]
fn uneven_ratios_give_remainder_to_last_pane() {
    let heights = pane_heights(601, &[1.0, 1.0, 1.0]);
    assert_eq!(heights, vec![200, 200, 201]);
    assert_eq!(heights.iter().sum::<u32>(), 601);
}

#[test]
fn serialization_is_deterministic() {
    let first = two_pane_chart();
    let second = two_pane_chart();

    let a = RenderFrame::build(&first).expect("frame a");
    let b = RenderFrame::build(&second).expect("frame b");
    assert_eq!(a.config_json(), b.config_json());
    assert_eq!(a.container_id(), b.container_id());
    assert_eq!(
        first.config_json().expect("config"),
        first.config_json().expect("config again")
    );
}

#[test]
fn container_id_changes_with_content() {
    let a = two_pane_chart();
    let mut b = two_pane_chart();
    let pane_id = b.panes()[1].id();
    b.pane_mut(pane_id)
        .expect("pane")
        .set_height_ratio(2.0)
        .expect("ratio");

    let frame_a = RenderFrame::build(&a).expect("frame a");
    let frame_b = RenderFrame::build(&b).expect("frame b");
    assert_ne!(frame_a.container_id(), frame_b.container_id());
    assert!(frame_a.container_id().starts_with("litechart-"));
}

#[test]
fn null_renderer_records_frame_size() {
    let chart = two_pane_chart();
    let mut renderer = NullRenderer::default();
    chart.render_with(&mut renderer).expect("render");

    assert_eq!(renderer.last_pane_count, 2);
    assert_eq!(renderer.last_series_count, 2);
    assert_eq!(renderer.last_record_count, 4);
    assert_eq!(
        renderer.last_config_json.as_deref(),
        Some(chart.config_json().expect("config").as_str())
    );
}

#[test]
fn sync_flag_is_carried_into_the_document() {
    let mut chart =
        create_chart(ChartOptions::default().with_time_scale_sync(false)).expect("chart");
    chart.add_line_series(LineOptions::default());
    assert_eq!(config_value(&chart)["syncTimeScales"], json!(false));
}
