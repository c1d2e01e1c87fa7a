use serde::{Deserialize, Serialize};

use crate::api::LineStyle;
use crate::error::{ChartError, ChartResult};

/// Horizontal line drawn across a series at a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLineOptions {
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label_text_color: Option<String>,
}

impl PriceLineOptions {
    #[must_use]
    pub fn new(price: f64) -> Self {
        Self {
            price,
            color: None,
            line_width: None,
            line_style: None,
            line_visible: None,
            axis_label_visible: None,
            title: None,
            axis_label_color: None,
            axis_label_text_color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        if !self.price.is_finite() {
            return Err(ChartError::InvalidOption(
                "price line price must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
