use serde::{Deserialize, Serialize};

use crate::core::UnixSeconds;
use crate::error::{ChartError, ChartResult};

/// Which record shape a series consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataFamily {
    /// `time, open, high, low, close` (+ optional `volume`).
    Ohlc,
    /// `time, value`.
    SingleValue,
}

impl DataFamily {
    /// Accepted column counts for positional array input.
    #[must_use]
    pub fn array_widths(self) -> &'static [usize] {
        match self {
            Self::Ohlc => &[5, 6],
            Self::SingleValue => &[2],
        }
    }

    #[must_use]
    pub fn array_layout(self) -> &'static str {
        match self {
            Self::Ohlc => "[time, open, high, low, close] or [time, open, high, low, close, volume]",
            Self::SingleValue => "[time, value]",
        }
    }
}

/// Canonical OHLC record used by candlestick and bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OhlcRecord {
    pub time: UnixSeconds,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wick_color: Option<String>,
}

impl OhlcRecord {
    /// Builds a validated OHLC record.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(
        time: UnixSeconds,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::schema(None, "ohlc values must be finite"));
        }
        if low > high {
            return Err(ChartError::schema(None, "ohlc low must be <= high"));
        }
        if open < low || open > high || close < low || close > high {
            return Err(ChartError::schema(
                None,
                "ohlc open/close must be within low/high range",
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
            color: None,
            border_color: None,
            wick_color: None,
        })
    }
}

/// Single-value record used by line, area, histogram and baseline series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub time: UnixSeconds,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ValueRecord {
    pub fn new(time: UnixSeconds, value: f64) -> ChartResult<Self> {
        if !value.is_finite() {
            return Err(ChartError::schema(None, "value must be finite"));
        }
        Ok(Self {
            time,
            value,
            color: None,
        })
    }
}

/// Normalized, time-ascending data of one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Ohlc(Vec<OhlcRecord>),
    SingleValue(Vec<ValueRecord>),
}

impl SeriesData {
    #[must_use]
    pub fn empty(family: DataFamily) -> Self {
        match family {
            DataFamily::Ohlc => Self::Ohlc(Vec::new()),
            DataFamily::SingleValue => Self::SingleValue(Vec::new()),
        }
    }

    #[must_use]
    pub fn family(&self) -> DataFamily {
        match self {
            Self::Ohlc(_) => DataFamily::Ohlc,
            Self::SingleValue(_) => DataFamily::SingleValue,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Ohlc(records) => records.len(),
            Self::SingleValue(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn times(&self) -> Vec<UnixSeconds> {
        match self {
            Self::Ohlc(records) => records.iter().map(|r| r.time).collect(),
            Self::SingleValue(records) => records.iter().map(|r| r.time).collect(),
        }
    }

    #[must_use]
    pub fn as_ohlc(&self) -> Option<&[OhlcRecord]> {
        match self {
            Self::Ohlc(records) => Some(records),
            Self::SingleValue(_) => None,
        }
    }

    #[must_use]
    pub fn as_values(&self) -> Option<&[ValueRecord]> {
        match self {
            Self::SingleValue(records) => Some(records),
            Self::Ohlc(_) => None,
        }
    }
}
