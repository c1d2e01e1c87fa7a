use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::option_map::{merge_deep, to_camel_case, to_object};
use super::{CrosshairMode, LineStyle, PriceScaleMode};

/// Page color presets applied beneath user layout and grid options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "#121214",
            Self::Light => "#fafafc",
        }
    }

    fn library_defaults(self) -> Map<String, Value> {
        let (text, grid) = match self {
            Self::Dark => ("#ebebf5", "#28282d"),
            Self::Light => ("#14141e", "#e6e6eb"),
        };
        let defaults = json!({
            "layout": {
                "background": {"type": "solid", "color": self.background()},
                "textColor": text,
            },
            "grid": {
                "vertLines": {"color": grid},
                "horzLines": {"color": grid},
            },
        });
        match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Background {
    #[serde(rename = "solid")]
    Solid { color: String },
    #[serde(rename = "gradient")]
    VerticalGradient {
        #[serde(rename = "topColor")]
        top_color: String,
        #[serde(rename = "bottomColor")]
        bottom_color: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLineOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vert_lines: Option<GridLineOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horz_lines: Option<GridLineOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairLineOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CrosshairMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vert_line: Option<CrosshairLineOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horz_line: Option<CrosshairLineOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeScaleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bar_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_left_edge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_right_edge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleMargins {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceScaleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PriceScaleMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert_scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_margins: Option<ScaleMargins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

/// Chart-wide options.
///
/// Serializable fields follow the library's option schema. `theme` and
/// `sync_time_scales` are handled by this crate and never reach the library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_size: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crosshair: Option<CrosshairOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<TimeScaleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_price_scale: Option<PriceScaleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_price_scale: Option<PriceScaleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_scroll: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization: Option<LocalizationOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<WatermarkOptions>,
    #[serde(skip)]
    pub theme: Option<Theme>,
    /// Keeps the visible range of stacked panes in lockstep. Defaults to on.
    #[serde(skip)]
    pub sync_time_scales: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ChartOptions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_time_scale_sync(mut self, enabled: bool) -> Self {
        self.sync_time_scales = Some(enabled);
        self
    }

    /// Adds an option the typed struct does not model.
    ///
    /// `snake_case` keys are converted to the library's `camelCase`.
    #[must_use]
    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(to_camel_case(key), value.into());
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.width.unwrap_or(Viewport::DEFAULT_WIDTH),
            self.height.unwrap_or(Viewport::DEFAULT_HEIGHT),
        )
    }

    #[must_use]
    pub fn time_scales_synced(&self) -> bool {
        self.sync_time_scales.unwrap_or(true)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidOption(format!(
                "chart size must be positive: width={}, height={}",
                viewport.width, viewport.height
            )));
        }
        Ok(())
    }

    /// Theme defaults deep-merged with the user options.
    pub fn effective(&self) -> ChartResult<Map<String, Value>> {
        let mut merged = self.theme.map(Theme::library_defaults).unwrap_or_default();
        merge_deep(&mut merged, to_object(self)?);
        Ok(merged)
    }
}
