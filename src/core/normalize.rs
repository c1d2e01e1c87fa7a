//! Input normalization: every accepted data shape becomes a canonical,
//! time-ascending record sequence for one [`DataFamily`].

use tracing::{debug, trace, warn};

use crate::core::primitives::{
    datetime_to_unix_seconds, decimal_to_f64, float_to_unix_seconds, parse_time_text,
};
use crate::core::{
    DataFamily, FieldValue, Frame, OhlcRecord, Row, SeriesData, SeriesInput, UnixSeconds,
    ValueRecord,
};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Time,
    Open,
    High,
    Low,
    Close,
    Volume,
    Value,
    Color,
}

const FIELD_COUNT: usize = 8;

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "time" => Some(Self::Time),
            "open" => Some(Self::Open),
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            "close" => Some(Self::Close),
            "volume" => Some(Self::Volume),
            "value" => Some(Self::Value),
            "color" => Some(Self::Color),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
            Self::Value => "value",
            Self::Color => "color",
        }
    }
}

/// Field-resolved view of one input row.
#[derive(Debug, Default)]
struct RawRecord<'a> {
    cells: [Option<&'a FieldValue>; FIELD_COUNT],
}

impl<'a> RawRecord<'a> {
    fn set(&mut self, field: Field, value: &'a FieldValue) {
        self.cells[field as usize] = Some(value);
    }

    fn get(&self, field: Field) -> Option<&'a FieldValue> {
        self.cells[field as usize]
    }
}

/// Converts `input` into canonical records for `family`.
///
/// The result is sorted by time; when several records share a timestamp the
/// last one in input order wins.
pub fn normalize(input: SeriesInput, family: DataFamily) -> ChartResult<SeriesData> {
    let original_count = input.len();
    let data = match input {
        SeriesInput::Rows(rows) => from_rows(&rows, family)?,
        SeriesInput::Frame(frame) => from_frame(&frame, family)?,
        SeriesInput::Array(array) => from_array(&array, family)?,
        SeriesInput::Records(data) => {
            if data.family() != family {
                return Err(ChartError::schema(
                    None,
                    format!(
                        "{:?} records cannot feed a {family:?} series",
                        data.family()
                    ),
                ));
            }
            validate_records(&data)?;
            data
        }
    };

    let data = canonicalize(data);
    debug!(
        ?family,
        original_count,
        canonical_count = data.len(),
        "normalized series input"
    );
    Ok(data)
}

fn from_rows(rows: &[Row], family: DataFamily) -> ChartResult<SeriesData> {
    let mut raw = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = RawRecord::default();
        for (name, value) in row {
            match Field::from_name(name) {
                Some(field) => record.set(field, value),
                None => trace!(field = %name, "ignoring unknown row field"),
            }
        }
        raw.push(record);
    }
    build(&raw, family)
}

fn from_frame(frame: &Frame, family: DataFamily) -> ChartResult<SeriesData> {
    let mapping: Vec<Option<Field>> = frame
        .columns()
        .iter()
        .map(|name| Field::from_name(name))
        .collect();
    let has_time_column = mapping.contains(&Some(Field::Time));

    let index = match (has_time_column, frame.index()) {
        (true, _) => None,
        (false, Some(index)) => {
            if index.len() != frame.len() {
                return Err(ChartError::shape(
                    format!("{} index entries", frame.len()),
                    format!("{} index entries", index.len()),
                ));
            }
            Some(index)
        }
        (false, None) => {
            return Err(ChartError::schema(
                None,
                "frame must have a `time` column or a time index",
            ));
        }
    };

    // A single column besides `time` and `color` feeds `value` whatever its name.
    let mut value_column = None;
    if family == DataFamily::SingleValue && !mapping.contains(&Some(Field::Value)) {
        let candidates: Vec<usize> = mapping
            .iter()
            .enumerate()
            .filter(|(_, field)| !matches!(field, Some(Field::Time | Field::Color)))
            .map(|(position, _)| position)
            .collect();
        match candidates.as_slice() {
            [only] => value_column = Some(*only),
            _ => {
                return Err(ChartError::schema(None, "cannot determine value column"));
            }
        }
    }

    let mut raw = Vec::with_capacity(frame.len());
    for (position, cells) in frame.rows().iter().enumerate() {
        if cells.len() != mapping.len() {
            return Err(ChartError::shape(
                format!("{} cells per row", mapping.len()),
                format!("{} cells in row {position}", cells.len()),
            ));
        }
        let mut record = RawRecord::default();
        for (column, cell) in cells.iter().enumerate() {
            if value_column == Some(column) {
                record.set(Field::Value, cell);
            } else if let Some(field) = mapping[column] {
                record.set(field, cell);
            }
        }
        if let Some(index) = index {
            record.set(Field::Time, &index[position]);
        }
        raw.push(record);
    }
    build(&raw, family)
}

fn from_array(array: &[Vec<f64>], family: DataFamily) -> ChartResult<SeriesData> {
    let widths = family.array_widths();
    for (position, row) in array.iter().enumerate() {
        if !widths.contains(&row.len()) {
            return Err(ChartError::shape(
                family.array_layout(),
                format!("{} columns in row {position}", row.len()),
            ));
        }
    }

    let fields: &[Field] = match family {
        DataFamily::Ohlc => &[
            Field::Time,
            Field::Open,
            Field::High,
            Field::Low,
            Field::Close,
            Field::Volume,
        ],
        DataFamily::SingleValue => &[Field::Time, Field::Value],
    };

    let cells: Vec<Vec<FieldValue>> = array
        .iter()
        .map(|row| row.iter().copied().map(FieldValue::Float).collect())
        .collect();
    let raw: Vec<RawRecord<'_>> = cells
        .iter()
        .map(|row| {
            let mut record = RawRecord::default();
            for (field, cell) in fields.iter().zip(row) {
                record.set(*field, cell);
            }
            record
        })
        .collect();
    build(&raw, family)
}

fn build(raw: &[RawRecord<'_>], family: DataFamily) -> ChartResult<SeriesData> {
    match family {
        DataFamily::Ohlc => raw
            .iter()
            .enumerate()
            .map(|(position, record)| build_ohlc(record).map_err(|e| at_row(e, position)))
            .collect::<ChartResult<Vec<_>>>()
            .map(SeriesData::Ohlc),
        DataFamily::SingleValue => raw
            .iter()
            .enumerate()
            .map(|(position, record)| build_value(record).map_err(|e| at_row(e, position)))
            .collect::<ChartResult<Vec<_>>>()
            .map(SeriesData::SingleValue),
    }
}

fn build_ohlc(record: &RawRecord<'_>) -> ChartResult<OhlcRecord> {
    let time = time_field(record)?;
    let mut ohlc = OhlcRecord::new(
        time,
        numeric_field(record, Field::Open)?,
        numeric_field(record, Field::High)?,
        numeric_field(record, Field::Low)?,
        numeric_field(record, Field::Close)?,
    )?;
    ohlc.volume = optional_numeric_field(record, Field::Volume)?;
    ohlc.color = color_field(record)?;
    Ok(ohlc)
}

fn build_value(record: &RawRecord<'_>) -> ChartResult<ValueRecord> {
    let time = time_field(record)?;
    let mut value = ValueRecord::new(time, numeric_field(record, Field::Value)?)?;
    value.color = color_field(record)?;
    Ok(value)
}

fn time_field(record: &RawRecord<'_>) -> ChartResult<UnixSeconds> {
    match record.get(Field::Time) {
        Some(FieldValue::Int(seconds)) => Ok(*seconds),
        Some(FieldValue::Float(seconds)) => float_to_unix_seconds(*seconds),
        Some(FieldValue::Decimal(seconds)) => {
            float_to_unix_seconds(decimal_to_f64(*seconds, "time")?)
        }
        Some(FieldValue::Text(text)) => parse_time_text(text),
        Some(FieldValue::Time(time)) => Ok(datetime_to_unix_seconds(*time)),
        Some(FieldValue::Null) | None => Err(missing(Field::Time)),
    }
}

fn numeric_field(record: &RawRecord<'_>, field: Field) -> ChartResult<f64> {
    optional_numeric_field(record, field)?.ok_or_else(|| missing(field))
}

fn optional_numeric_field(record: &RawRecord<'_>, field: Field) -> ChartResult<Option<f64>> {
    let value = match record.get(field) {
        None | Some(FieldValue::Null) => return Ok(None),
        Some(FieldValue::Int(int)) => *int as f64,
        Some(FieldValue::Float(float)) => *float,
        Some(FieldValue::Decimal(decimal)) => decimal_to_f64(*decimal, field.name())?,
        Some(other) => {
            return Err(ChartError::schema(
                None,
                format!(
                    "`{}` must be numeric, found {}",
                    field.name(),
                    other.type_name()
                ),
            ));
        }
    };
    if !value.is_finite() {
        return Err(ChartError::schema(
            None,
            format!("`{}` must be finite", field.name()),
        ));
    }
    Ok(Some(value))
}

fn color_field(record: &RawRecord<'_>) -> ChartResult<Option<String>> {
    match record.get(Field::Color) {
        None | Some(FieldValue::Null) => Ok(None),
        Some(FieldValue::Text(color)) => Ok(Some(color.clone())),
        Some(other) => Err(ChartError::schema(
            None,
            format!("`color` must be text, found {}", other.type_name()),
        )),
    }
}

fn missing(field: Field) -> ChartError {
    ChartError::schema(None, format!("missing required field `{}`", field.name()))
}

fn at_row(err: ChartError, position: usize) -> ChartError {
    match err {
        ChartError::Schema { row: None, message } => ChartError::Schema {
            row: Some(position),
            message,
        },
        other => other,
    }
}

fn validate_records(data: &SeriesData) -> ChartResult<()> {
    match data {
        SeriesData::Ohlc(records) => {
            for (position, record) in records.iter().enumerate() {
                OhlcRecord::new(
                    record.time,
                    record.open,
                    record.high,
                    record.low,
                    record.close,
                )
                .map_err(|e| at_row(e, position))?;
            }
        }
        SeriesData::SingleValue(records) => {
            for (position, record) in records.iter().enumerate() {
                ValueRecord::new(record.time, record.value).map_err(|e| at_row(e, position))?;
            }
        }
    }
    Ok(())
}

fn canonicalize(data: SeriesData) -> SeriesData {
    match data {
        SeriesData::Ohlc(records) => SeriesData::Ohlc(sort_and_dedup(records, |r| r.time)),
        SeriesData::SingleValue(records) => {
            SeriesData::SingleValue(sort_and_dedup(records, |r| r.time))
        }
    }
}

fn sort_and_dedup<T>(mut records: Vec<T>, time_of: impl Fn(&T) -> UnixSeconds) -> Vec<T> {
    let was_sorted = records
        .windows(2)
        .all(|pair| time_of(&pair[0]) <= time_of(&pair[1]));
    // Stable sort keeps input order among equal timestamps, so the last
    // duplicate is the most recent one.
    records.sort_by_key(&time_of);

    let mut deduped: Vec<T> = Vec::with_capacity(records.len());
    let mut duplicate_count = 0_usize;
    for record in records {
        if let Some(last) = deduped.last_mut() {
            if time_of(&record) == time_of(&*last) {
                *last = record;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(record);
    }

    if !was_sorted || duplicate_count > 0 {
        warn!(
            reordered = !was_sorted,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized series records"
        );
    }
    deduped
}
