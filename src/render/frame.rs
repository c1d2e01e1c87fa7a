use serde_json::{Value, json};
use tracing::debug;

use crate::api::{
    CHART_DOCUMENT_SCHEMA_V1, Chart, ChartDocument, PaneDocument, SeriesDocument, merge_deep,
};
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::extensions::collect_marker_tooltips;

use super::layout::pane_heights;

/// Target-agnostic output of one render pass.
///
/// Built from a validated chart. Identical charts produce identical frames,
/// including the container id.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    viewport: Viewport,
    document: ChartDocument,
    config_json: String,
    container_id: String,
}

impl RenderFrame {
    pub fn build(chart: &Chart) -> ChartResult<Self> {
        validate_chart(chart)?;

        let options = chart.options();
        let viewport = options.viewport();
        let ratios: Vec<f64> = chart.panes().iter().map(|pane| pane.height_ratio()).collect();
        let heights = pane_heights(viewport.height, &ratios);
        let base_options = options.effective()?;
        let last_index = chart.panes().len() - 1;
        let stacked = chart.panes().len() > 1;

        let mut panes = Vec::with_capacity(chart.panes().len());
        for (index, (pane, height)) in chart.panes().iter().zip(heights).enumerate() {
            let mut chart_options = base_options.clone();
            let mut sizing = json!({ "width": viewport.width, "height": height });
            if stacked && index != last_index {
                sizing["timeScale"] = json!({ "visible": false });
            }
            if let Value::Object(sizing) = sizing {
                merge_deep(&mut chart_options, sizing);
            }

            let mut series = Vec::with_capacity(pane.series().len());
            for entry in pane.series() {
                series.push(SeriesDocument {
                    kind: entry.kind().library_name(),
                    options: entry.effective_options()?,
                    data: entry.data().clone(),
                    markers: entry.markers().to_vec(),
                    price_lines: entry.price_lines().to_vec(),
                });
            }

            panes.push(PaneDocument {
                height_ratio: pane.height_ratio(),
                height,
                chart_options,
                series,
                tooltips: collect_marker_tooltips(pane),
            });
        }

        let document = ChartDocument {
            schema_version: CHART_DOCUMENT_SCHEMA_V1,
            width: viewport.width,
            height: viewport.height,
            sync_time_scales: options.time_scales_synced(),
            panes,
        };
        let config_json = document.to_json_string()?;
        let container_id = format!("litechart-{:016x}", fnv1a_64(config_json.as_bytes()));
        debug!(
            pane_count = document.panes.len(),
            series_count = document.series_count(),
            record_count = document.record_count(),
            config_bytes = config_json.len(),
            %container_id,
            "built render frame"
        );

        Ok(Self {
            viewport,
            document,
            config_json,
            container_id,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn document(&self) -> &ChartDocument {
        &self.document
    }

    #[must_use]
    pub fn config_json(&self) -> &str {
        &self.config_json
    }

    /// DOM id derived from the configuration content.
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.document.panes.len()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.document.series_count()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.document.record_count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::Render(format!(
                "invalid viewport {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.document.panes.is_empty() {
            return Err(ChartError::Render("frame has no panes".to_owned()));
        }
        Ok(())
    }
}

fn validate_chart(chart: &Chart) -> ChartResult<()> {
    chart
        .options()
        .validate()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    if chart.panes().is_empty() {
        return Err(ChartError::Render("chart has no panes".to_owned()));
    }
    for (index, pane) in chart.panes().iter().enumerate() {
        if pane.is_empty() {
            return Err(ChartError::Render(format!("pane {index} has no series")));
        }
    }
    Ok(())
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes.iter().fold(OFFSET, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::fnv1a_64;

    #[test]
    fn fnv1a_matches_reference_values() {
        assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
    }
}
