use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::core::UnixSeconds;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
    InBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    Circle,
    Square,
    ArrowUp,
    ArrowDown,
}

/// Hover content shown for a marker that also carries an `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerTooltip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl MarkerTooltip {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMarker {
    pub time: UnixSeconds,
    pub position: MarkerPosition,
    pub shape: MarkerShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Rendered by the hover tooltip script, not by the library itself.
    #[serde(skip)]
    pub tooltip: Option<MarkerTooltip>,
}

impl SeriesMarker {
    #[must_use]
    pub fn new(time: UnixSeconds, position: MarkerPosition, shape: MarkerShape) -> Self {
        Self {
            time,
            position,
            shape,
            color: None,
            text: None,
            size: None,
            id: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: MarkerTooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    fn validate(&self) -> ChartResult<()> {
        if let Some(size) = self.size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidOption(format!(
                    "marker size must be finite and > 0, got {size}"
                )));
            }
        }
        if self.tooltip.is_some() && self.id.is_none() {
            return Err(ChartError::InvalidOption(
                "marker tooltip requires a marker id".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Validates markers and orders them by time, keeping input order for ties.
///
/// Marker ids must be unique within one call.
pub fn canonicalize_markers(mut markers: Vec<SeriesMarker>) -> ChartResult<Vec<SeriesMarker>> {
    let mut ids = BTreeSet::new();
    for marker in &markers {
        marker.validate()?;
        if let Some(id) = &marker.id {
            if !ids.insert(id.as_str()) {
                return Err(ChartError::InvalidOption(format!(
                    "duplicate marker id `{id}`"
                )));
            }
        }
    }
    markers.sort_by_key(|marker| marker.time);
    Ok(markers)
}
