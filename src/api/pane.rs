use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::{
    AreaOptions, BarOptions, BaselineOptions, CandlestickOptions, HistogramOptions, LineOptions,
    Series, SeriesId, SeriesOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaneId(u32);

impl PaneId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneOptions {
    /// Height weight relative to sibling panes.
    #[serde(default = "default_height_ratio")]
    pub height_ratio: f64,
}

impl PaneOptions {
    #[must_use]
    pub fn with_height_ratio(height_ratio: f64) -> Self {
        Self { height_ratio }
    }
}

impl Default for PaneOptions {
    fn default() -> Self {
        Self {
            height_ratio: default_height_ratio(),
        }
    }
}

fn default_height_ratio() -> f64 {
    1.0
}

/// A stacked chart region with its own price axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    id: PaneId,
    height_ratio: f64,
    series: Vec<Series>,
    next_series_id: u32,
}

impl Pane {
    pub(crate) fn new(id: PaneId, options: PaneOptions) -> ChartResult<Self> {
        validate_height_ratio(options.height_ratio)?;
        Ok(Self {
            id,
            height_ratio: options.height_ratio,
            series: Vec::new(),
            next_series_id: 0,
        })
    }

    pub(crate) fn default_for(id: PaneId) -> Self {
        Self {
            id,
            height_ratio: default_height_ratio(),
            series: Vec::new(),
            next_series_id: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PaneId {
        self.id
    }

    #[must_use]
    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    pub fn set_height_ratio(&mut self, height_ratio: f64) -> ChartResult<()> {
        validate_height_ratio(height_ratio)?;
        self.height_ratio = height_ratio;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_id(&self, id: SeriesId) -> Option<&Series> {
        self.series.iter().find(|series| series.id() == id)
    }

    pub fn series_by_id_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|series| series.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Appends a series of the kind carried by `options`.
    pub fn add_series(&mut self, options: impl Into<SeriesOptions>) -> &mut Series {
        let options = options.into();
        let id = SeriesId::new(self.next_series_id);
        self.next_series_id = self.next_series_id.saturating_add(1);
        debug!(pane = self.id.raw(), series = id.raw(), kind = ?options.kind(), "add series");
        let index = self.series.len();
        self.series.push(Series::new(id, options));
        &mut self.series[index]
    }

    pub fn add_candlestick_series(&mut self, options: CandlestickOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_bar_series(&mut self, options: BarOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_line_series(&mut self, options: LineOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_area_series(&mut self, options: AreaOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_histogram_series(&mut self, options: HistogramOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_baseline_series(&mut self, options: BaselineOptions) -> &mut Series {
        self.add_series(options)
    }
}

pub(crate) fn validate_height_ratio(height_ratio: f64) -> ChartResult<()> {
    if !height_ratio.is_finite() || height_ratio <= 0.0 {
        return Err(ChartError::InvalidOption(format!(
            "pane height ratio must be finite and > 0, got {height_ratio}"
        )));
    }
    Ok(())
}
