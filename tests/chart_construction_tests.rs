use litechart::api::{
    CandlestickOptions, HistogramOptions, LineOptions, PaneOptions, SeriesKind, SeriesOptions,
    Theme,
};
use litechart::core::{DataFamily, SeriesData, ValueRecord};
use litechart::{ChartError, ChartOptions, create_chart, row};

#[test]
fn default_chart_is_800_by_600() {
    let chart = create_chart(ChartOptions::default()).expect("chart");
    let viewport = chart.options().viewport();
    assert_eq!((viewport.width, viewport.height), (800, 600));
    assert!(chart.panes().is_empty());
}

#[test]
fn zero_sized_chart_is_rejected() {
    let err = create_chart(ChartOptions::new(0, 600)).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidOption(_)));

    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let err = chart
        .set_options(ChartOptions::new(800, 0))
        .expect_err("zero height");
    assert!(matches!(err, ChartError::InvalidOption(_)));
    assert_eq!(chart.options().viewport().height, 600);
}

#[test]
fn panes_keep_insertion_order_and_ratio() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let main = chart
        .add_pane(PaneOptions::with_height_ratio(3.0))
        .expect("main pane")
        .id();
    let volume = chart
        .add_pane(PaneOptions::with_height_ratio(1.0))
        .expect("volume pane")
        .id();

    let ids: Vec<_> = chart.panes().iter().map(|pane| pane.id()).collect();
    assert_eq!(ids, vec![main, volume]);
    assert_eq!(chart.pane(main).expect("main").height_ratio(), 3.0);
}

#[test]
fn non_positive_height_ratio_is_rejected() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let err = chart
        .add_pane(PaneOptions::with_height_ratio(0.0))
        .expect_err("zero ratio");
    assert!(matches!(err, ChartError::InvalidOption(_)));
    assert!(chart.panes().is_empty());

    let pane = chart.add_pane(PaneOptions::default()).expect("pane");
    let err = pane.set_height_ratio(-2.0).expect_err("negative ratio");
    assert!(matches!(err, ChartError::InvalidOption(_)));
    assert_eq!(pane.height_ratio(), 1.0);
}

#[test]
fn chart_level_series_share_a_lazy_default_pane() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    chart.add_candlestick_series(CandlestickOptions::default());
    chart.add_line_series(LineOptions::default());

    assert_eq!(chart.panes().len(), 1);
    let kinds: Vec<SeriesKind> = chart.panes()[0]
        .series()
        .iter()
        .map(|series| series.kind())
        .collect();
    assert_eq!(kinds, vec![SeriesKind::Candlestick, SeriesKind::Line]);
}

#[test]
fn new_series_starts_empty_with_kind_family() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let pane = chart.add_pane(PaneOptions::default()).expect("pane");
    let series = pane.add_histogram_series(HistogramOptions::default());
    assert_eq!(series.data(), &SeriesData::empty(DataFamily::SingleValue));
}

#[test]
fn set_data_twice_keeps_only_the_second_dataset() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());

    series
        .set_data(vec![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]])
        .expect("first data");
    series.set_data(vec![[5.0, 50.0]]).expect("second data");

    assert_eq!(
        series.data(),
        &SeriesData::SingleValue(vec![ValueRecord::new(5, 50.0).expect("record")])
    );
}

#[test]
fn failed_set_data_keeps_previous_data() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());
    series.set_data(vec![[1.0, 10.0]]).expect("data");

    let err = series
        .set_data(vec![row! { "time" => 2_i64 }])
        .expect_err("missing value");
    assert!(matches!(err, ChartError::Schema { .. }));
    assert_eq!(series.data().times(), vec![1]);
}

#[test]
fn ohlc_input_on_value_series_is_shape_error() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());
    let err = series
        .set_data(vec![[1.0, 100.0, 105.0, 95.0, 102.0]])
        .expect_err("five columns on a line series");
    assert!(matches!(err, ChartError::Shape { .. }));
}

#[test]
fn set_options_rejects_a_different_kind() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let series = chart.add_line_series(LineOptions::default());

    let err = series
        .set_options(CandlestickOptions::default())
        .expect_err("kind change");
    assert!(matches!(err, ChartError::InvalidOption(_)));

    let mut options = LineOptions::default();
    options.line_width = Some(3);
    series.set_options(options).expect("same kind");
    match series.options() {
        SeriesOptions::Line(line) => assert_eq!(line.line_width, Some(3)),
        other => panic!("unexpected options: {other:?}"),
    }
}

#[test]
fn series_lookup_by_id() {
    let mut chart = create_chart(ChartOptions::default()).expect("chart");
    let pane = chart.add_pane(PaneOptions::default()).expect("pane");
    let pane_id = pane.id();
    let series_id = pane.add_line_series(LineOptions::default()).id();

    let series = chart
        .pane_mut(pane_id)
        .and_then(|pane| pane.series_by_id_mut(series_id))
        .expect("series by id");
    series.set_data(vec![[1.0, 1.0]]).expect("data");

    let stored = chart
        .pane(pane_id)
        .and_then(|pane| pane.series_by_id(series_id))
        .expect("series by id");
    assert_eq!(stored.data().len(), 1);
}

#[test]
fn theme_and_sync_are_chart_options() {
    let options = ChartOptions::new(640, 480)
        .with_theme(Theme::Light)
        .with_time_scale_sync(false);
    let chart = create_chart(options).expect("chart");
    assert!(!chart.options().time_scales_synced());
    assert_eq!(chart.options().theme, Some(Theme::Light));
}
