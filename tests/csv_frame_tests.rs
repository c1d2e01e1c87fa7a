use litechart::ChartError;
use litechart::core::{DataFamily, FieldValue, Frame, SeriesInput, normalize};

const CANDLES_CSV: &str = "\
date,open,high,low,close,volume
2021-01-02,102,108,101,107,900
2021-01-01,100,105,95,102,
";

#[test]
fn csv_cells_are_inferred() {
    let frame = Frame::from_csv_reader(CANDLES_CSV.as_bytes()).expect("csv frame");
    assert_eq!(
        frame.columns(),
        ["date", "open", "high", "low", "close", "volume"]
    );
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.rows()[0][0], FieldValue::Text("2021-01-02".to_owned()));
    assert_eq!(frame.rows()[0][1], FieldValue::Int(102));
    assert_eq!(frame.rows()[1][5], FieldValue::Null);
}

#[test]
fn csv_frame_without_time_column_needs_an_index() {
    let frame = Frame::from_csv_reader(CANDLES_CSV.as_bytes()).expect("csv frame");
    let err = normalize(SeriesInput::from(frame), DataFamily::Ohlc)
        .expect_err("`date` is not a time column");
    assert!(matches!(err, ChartError::Schema { .. }));
}

#[test]
fn csv_frame_with_time_column_normalizes_sorted() {
    let csv = CANDLES_CSV.replacen("date", "time", 1);
    let frame = Frame::from_csv_reader(csv.as_bytes()).expect("csv frame");
    let data = normalize(SeriesInput::from(frame), DataFamily::Ohlc).expect("normalize");
    let records = data.as_ohlc().expect("ohlc data");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].time, 1_609_459_200);
    assert_eq!(records[0].volume, None);
    assert_eq!(records[1].time, 1_609_545_600);
    assert_eq!(records[1].volume, Some(900.0));
}

#[test]
fn csv_file_round_trip_through_disk() {
    let dir = std::env::temp_dir().join(format!("litechart-csv-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("values.csv");
    std::fs::write(&path, "time,value\n1,10.5\n2,11.0\n").expect("write csv");

    let frame = Frame::from_csv_path(&path).expect("read csv");
    let data = normalize(SeriesInput::from(frame), DataFamily::SingleValue).expect("normalize");
    assert_eq!(data.times(), vec![1, 2]);

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn missing_csv_file_is_an_error() {
    let err = Frame::from_csv_path("/definitely/not/here.csv").expect_err("missing file");
    assert!(matches!(err, ChartError::Csv(_) | ChartError::Io(_)));
}
