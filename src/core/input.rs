use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::core::{OhlcRecord, SeriesData, ValueRecord};
use crate::error::{ChartError, ChartResult};

/// One cell of caller-provided data before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Time(DateTime<Utc>),
    Null,
}

impl FieldValue {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::Text(_) => "text",
            Self::Time(_) => "datetime",
            Self::Null => "null",
        }
    }

    fn from_json(value: &Value, row: usize) -> ChartResult<Self> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(Self::Int(int))
                } else if let Some(float) = number.as_f64() {
                    Ok(Self::Float(float))
                } else {
                    Err(ChartError::schema(
                        Some(row),
                        format!("number {number} is not representable"),
                    ))
                }
            }
            other => Err(ChartError::schema(
                Some(row),
                format!("unsupported json value `{other}`"),
            )),
        }
    }

    fn infer_from_text(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            Self::Null
        } else if let Ok(int) = trimmed.parse::<i64>() {
            Self::Int(int)
        } else if let Ok(float) = trimmed.parse::<f64>() {
            Self::Float(float)
        } else {
            Self::Text(trimmed.to_owned())
        }
    }
}

macro_rules! field_value_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

field_value_from! {
    i64 => Int as i64,
    i32 => Int as i64,
    u32 => Int as i64,
    f64 => Float as f64,
    f32 => Float as f64,
    Decimal => Decimal as Decimal,
    String => Text as String,
    &str => Text as String,
    DateTime<Utc> => Time as DateTime<Utc>,
}

/// A field-keyed input row, e.g. `{"time": ..., "open": ...}`.
pub type Row = IndexMap<String, FieldValue>;

/// Builds a [`Row`] from `"field" => value` pairs.
///
/// ```
/// let row = litechart::row! { "time" => 1609459200, "value" => 10.5 };
/// assert_eq!(row.len(), 2);
/// ```
#[macro_export]
macro_rules! row {
    ($($field:expr => $value:expr),* $(,)?) => {{
        let mut row = $crate::core::Row::new();
        $(
            row.insert(
                ::std::string::String::from($field),
                $crate::core::FieldValue::from($value),
            );
        )*
        row
    }};
}

/// Labeled tabular input: named columns, row-major cells and an optional
/// time index used when no `time` column is present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<String>,
    index: Option<Vec<FieldValue>>,
    rows: Vec<Vec<FieldValue>>,
}

impl Frame {
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: None,
            rows: Vec::new(),
        }
    }

    /// Builds a frame from named columns of equal length.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<FieldValue>)>) -> ChartResult<Self> {
        let row_count = columns.first().map_or(0, |(_, values)| values.len());
        let mut names = Vec::with_capacity(columns.len());
        let mut cells = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            let name = name.into();
            if values.len() != row_count {
                return Err(ChartError::shape(
                    format!("{row_count} values per column"),
                    format!("{} values in column `{name}`", values.len()),
                ));
            }
            names.push(name);
            cells.push(values.into_iter());
        }

        let mut rows = Vec::with_capacity(row_count);
        for _ in 0..row_count {
            rows.push(
                cells
                    .iter_mut()
                    .map(|column| column.next().unwrap_or(FieldValue::Null))
                    .collect(),
            );
        }

        Ok(Self {
            columns: names,
            index: None,
            rows,
        })
    }

    #[must_use]
    pub fn with_index(mut self, index: Vec<FieldValue>) -> Self {
        self.index = Some(index);
        self
    }

    pub fn push_row(&mut self, row: Vec<FieldValue>) -> ChartResult<()> {
        if row.len() != self.columns.len() {
            return Err(ChartError::shape(
                format!("{} cells per row", self.columns.len()),
                format!("{} cells", row.len()),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Reads a headed CSV table. Cells are inferred as integer, float or text;
    /// empty cells become `Null`.
    pub fn from_csv_reader<R: Read>(reader: R) -> ChartResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut frame = Self::new(csv_reader.headers()?.iter());
        for record in csv_reader.records() {
            let record = record?;
            frame.push_row(record.iter().map(FieldValue::infer_from_text).collect())?;
        }
        debug!(
            columns = frame.columns.len(),
            rows = frame.rows.len(),
            "loaded csv frame"
        );
        Ok(frame)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        Self::from_csv_reader(File::open(path)?)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn index(&self) -> Option<&[FieldValue]> {
        self.index.as_deref()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every data shape `Series::set_data` accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesInput {
    Rows(Vec<Row>),
    Frame(Frame),
    /// Positional numeric columns, see [`DataFamily::array_layout`](crate::core::DataFamily::array_layout).
    Array(Vec<Vec<f64>>),
    /// Already typed records; still sorted and deduplicated.
    Records(SeriesData),
}

impl SeriesInput {
    /// Reads a JSON array of objects (rows) or of numeric arrays (positional).
    pub fn from_json(value: &Value) -> ChartResult<Self> {
        let Value::Array(items) = value else {
            return Err(ChartError::schema(None, "series json must be an array"));
        };

        if items.iter().all(Value::is_object) {
            let mut rows = Vec::with_capacity(items.len());
            for (position, item) in items.iter().enumerate() {
                let Value::Object(object) = item else {
                    continue;
                };
                let mut row = Row::with_capacity(object.len());
                for (key, value) in object {
                    row.insert(key.clone(), FieldValue::from_json(value, position)?);
                }
                rows.push(row);
            }
            return Ok(Self::Rows(rows));
        }

        if items.iter().all(Value::is_array) {
            let mut array = Vec::with_capacity(items.len());
            for (position, item) in items.iter().enumerate() {
                let Value::Array(cells) = item else {
                    continue;
                };
                let mut numeric = Vec::with_capacity(cells.len());
                for cell in cells {
                    let Some(number) = cell.as_f64() else {
                        return Err(ChartError::schema(
                            Some(position),
                            format!("array cell `{cell}` is not numeric"),
                        ));
                    };
                    numeric.push(number);
                }
                array.push(numeric);
            }
            return Ok(Self::Array(array));
        }

        Err(ChartError::schema(
            None,
            "series json must contain only objects or only arrays",
        ))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Frame(frame) => frame.len(),
            Self::Array(array) => array.len(),
            Self::Records(data) => data.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Row>> for SeriesInput {
    fn from(rows: Vec<Row>) -> Self {
        Self::Rows(rows)
    }
}

impl From<Frame> for SeriesInput {
    fn from(frame: Frame) -> Self {
        Self::Frame(frame)
    }
}

impl From<Vec<Vec<f64>>> for SeriesInput {
    fn from(array: Vec<Vec<f64>>) -> Self {
        Self::Array(array)
    }
}

impl<const N: usize> From<Vec<[f64; N]>> for SeriesInput {
    fn from(array: Vec<[f64; N]>) -> Self {
        Self::Array(array.into_iter().map(|row| row.to_vec()).collect())
    }
}

impl From<Vec<OhlcRecord>> for SeriesInput {
    fn from(records: Vec<OhlcRecord>) -> Self {
        Self::Records(SeriesData::Ohlc(records))
    }
}

impl From<Vec<ValueRecord>> for SeriesInput {
    fn from(records: Vec<ValueRecord>) -> Self {
        Self::Records(SeriesData::SingleValue(records))
    }
}
