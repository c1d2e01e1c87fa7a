use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::DataFamily;
use crate::error::ChartResult;

use super::option_map::{merge_shallow, to_camel_case, to_object};
use super::{LineStyle, LineType};

/// Closed set of series kinds the library draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Candlestick,
    Bar,
    Line,
    Area,
    Histogram,
    Baseline,
}

impl SeriesKind {
    pub const ALL: [Self; 6] = [
        Self::Candlestick,
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Histogram,
        Self::Baseline,
    ];

    #[must_use]
    pub fn family(self) -> DataFamily {
        match self {
            Self::Candlestick | Self::Bar => DataFamily::Ohlc,
            Self::Line | Self::Area | Self::Histogram | Self::Baseline => DataFamily::SingleValue,
        }
    }

    /// Name used by the library's `add<Name>Series` factory.
    #[must_use]
    pub fn library_name(self) -> &'static str {
        match self {
            Self::Candlestick => "Candlestick",
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Area => "Area",
            Self::Histogram => "Histogram",
            Self::Baseline => "Baseline",
        }
    }

    /// Library defaults the wrapper applies beneath user options.
    #[must_use]
    pub fn default_options(self) -> Map<String, Value> {
        let defaults = match self {
            Self::Candlestick => json!({
                "upColor": "#26a69a",
                "downColor": "#ef5350",
                "borderVisible": false,
                "wickUpColor": "#26a69a",
                "wickDownColor": "#ef5350",
            }),
            Self::Bar => json!({
                "upColor": "#26a69a",
                "downColor": "#ef5350",
            }),
            Self::Line => json!({
                "color": "#2962ff",
                "lineWidth": 2,
            }),
            Self::Area => json!({
                "lineColor": "#2962ff",
                "topColor": "rgba(41, 98, 255, 0.4)",
                "bottomColor": "rgba(41, 98, 255, 0)",
                "lineWidth": 2,
            }),
            Self::Histogram => json!({
                "color": "#26a69a",
                "base": 0,
            }),
            Self::Baseline => json!({
                "baseValue": {"type": "price", "price": 0},
                "topLineColor": "rgba(38, 166, 154, 1)",
                "topFillColor1": "rgba(38, 166, 154, 0.28)",
                "topFillColor2": "rgba(38, 166, 154, 0.05)",
                "bottomLineColor": "rgba(239, 83, 80, 1)",
                "bottomFillColor1": "rgba(239, 83, 80, 0.05)",
                "bottomFillColor2": "rgba(239, 83, 80, 0.28)",
            }),
        };
        match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceFormatKind {
    Price,
    Volume,
    Percent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFormat {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PriceFormatKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_move: Option<f64>,
}

/// Options every series kind understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCommonOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_value_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_line_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_line_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_line_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_format: Option<PriceFormat>,
    /// Empty string places the series on its own overlay scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_scale_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickOptions {
    #[serde(flatten)]
    pub common: SeriesCommonOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wick_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_up_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_down_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wick_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wick_up_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wick_down_color: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarOptions {
    #[serde(flatten)]
    pub common: SeriesCommonOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thin_bars: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOptions {
    #[serde(flatten)]
    pub common: SeriesCommonOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<LineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_markers_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_markers_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crosshair_marker_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crosshair_marker_radius: Option<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOptions {
    #[serde(flatten)]
    pub common: SeriesCommonOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert_filled_area: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<LineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_markers_visible: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramOptions {
    #[serde(flatten)]
    pub common: SeriesCommonOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BaseValue {
    Price { price: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineOptions {
    #[serde(flatten)]
    pub common: SeriesCommonOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_value: Option<BaseValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_fill_color1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_fill_color2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<LineType>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

macro_rules! series_options_common {
    ($($options:ident => $kind:ident),+ $(,)?) => {
        $(
            impl $options {
                /// Adds an option the typed struct does not model.
                ///
                /// `snake_case` keys are converted to the library's `camelCase`.
                #[must_use]
                pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
                    self.extra.insert(to_camel_case(key), value.into());
                    self
                }

                #[must_use]
                pub fn with_title(mut self, title: impl Into<String>) -> Self {
                    self.common.title = Some(title.into());
                    self
                }
            }

            impl From<$options> for SeriesOptions {
                fn from(options: $options) -> Self {
                    Self::$kind(options)
                }
            }
        )+
    };
}

series_options_common! {
    CandlestickOptions => Candlestick,
    BarOptions => Bar,
    LineOptions => Line,
    AreaOptions => Area,
    HistogramOptions => Histogram,
    BaselineOptions => Baseline,
}

/// Per-kind series options; the variant is the series kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options")]
pub enum SeriesOptions {
    Candlestick(CandlestickOptions),
    Bar(BarOptions),
    Line(LineOptions),
    Area(AreaOptions),
    Histogram(HistogramOptions),
    Baseline(BaselineOptions),
}

impl SeriesOptions {
    #[must_use]
    pub fn default_for(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Candlestick => Self::Candlestick(CandlestickOptions::default()),
            SeriesKind::Bar => Self::Bar(BarOptions::default()),
            SeriesKind::Line => Self::Line(LineOptions::default()),
            SeriesKind::Area => Self::Area(AreaOptions::default()),
            SeriesKind::Histogram => Self::Histogram(HistogramOptions::default()),
            SeriesKind::Baseline => Self::Baseline(BaselineOptions::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Candlestick(_) => SeriesKind::Candlestick,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Line(_) => SeriesKind::Line,
            Self::Area(_) => SeriesKind::Area,
            Self::Histogram(_) => SeriesKind::Histogram,
            Self::Baseline(_) => SeriesKind::Baseline,
        }
    }

    /// User options only, as the library's option object.
    pub fn to_library_object(&self) -> ChartResult<Map<String, Value>> {
        match self {
            Self::Candlestick(options) => to_object(options),
            Self::Bar(options) => to_object(options),
            Self::Line(options) => to_object(options),
            Self::Area(options) => to_object(options),
            Self::Histogram(options) => to_object(options),
            Self::Baseline(options) => to_object(options),
        }
    }

    /// Kind defaults shallow-merged with the user options.
    pub fn effective(&self) -> ChartResult<Map<String, Value>> {
        let mut merged = self.kind().default_options();
        merge_shallow(&mut merged, self.to_library_object()?);
        Ok(merged)
    }
}
