use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::SeriesData;
use crate::error::ChartResult;
use crate::extensions::{MarkerTooltip, PriceLineOptions, SeriesMarker};

pub const CHART_DOCUMENT_SCHEMA_V1: u32 = 1;

/// Configuration handed to the bootstrap script.
///
/// Field names are the exact keys the script reads; changing them is a
/// schema bump.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    pub schema_version: u32,
    pub width: u32,
    pub height: u32,
    pub sync_time_scales: bool,
    pub panes: Vec<PaneDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneDocument {
    pub height_ratio: f64,
    /// Pixel height after distributing the chart height across panes.
    pub height: u32,
    pub chart_options: Map<String, Value>,
    pub series: Vec<SeriesDocument>,
    pub tooltips: BTreeMap<String, MarkerTooltip>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDocument {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub options: Map<String, Value>,
    pub data: SeriesData,
    pub markers: Vec<SeriesMarker>,
    pub price_lines: Vec<PriceLineOptions>,
}

impl ChartDocument {
    /// Compact form embedded in rendered output.
    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.panes.iter().map(|pane| pane.series.len()).sum()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.panes
            .iter()
            .flat_map(|pane| pane.series.iter())
            .map(|series| series.data.len())
            .sum()
    }
}
