//! Chart construction API: options, series, panes and the chart root.

mod chart;
mod chart_options;
mod json_contract;
mod option_map;
mod pane;
mod series;
mod series_options;
mod styles;

pub use chart::{Chart, create_chart};
pub use chart_options::{
    Background, ChartOptions, CrosshairLineOptions, CrosshairOptions, GridLineOptions,
    GridOptions, LayoutOptions, LocalizationOptions, PriceScaleOptions, ScaleMargins, Theme,
    TimeScaleOptions, WatermarkOptions,
};
pub use json_contract::{
    CHART_DOCUMENT_SCHEMA_V1, ChartDocument, PaneDocument, SeriesDocument,
};
pub use option_map::to_camel_case;
pub use pane::{Pane, PaneId, PaneOptions};
pub use series::{Series, SeriesId};
pub use series_options::{
    AreaOptions, BarOptions, BaseValue, BaselineOptions, CandlestickOptions, HistogramOptions,
    LineOptions, PriceFormat, PriceFormatKind, SeriesCommonOptions, SeriesKind, SeriesOptions,
};
pub use styles::{CrosshairMode, LineStyle, LineType, PriceScaleMode};

pub(crate) use option_map::merge_deep;
