use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{SeriesData, SeriesInput, normalize};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{PriceLineOptions, SeriesMarker, canonicalize_markers};

use super::{SeriesKind, SeriesOptions};

/// Identifier of a series, unique within its pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(u32);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One plotted dataset of a fixed kind.
///
/// Data, options and markers are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    id: SeriesId,
    options: SeriesOptions,
    data: SeriesData,
    markers: Vec<SeriesMarker>,
    price_lines: Vec<PriceLineOptions>,
}

impl Series {
    pub(crate) fn new(id: SeriesId, options: SeriesOptions) -> Self {
        let family = options.kind().family();
        Self {
            id,
            options,
            data: SeriesData::empty(family),
            markers: Vec::new(),
            price_lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.options.kind()
    }

    #[must_use]
    pub fn options(&self) -> &SeriesOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    #[must_use]
    pub fn markers(&self) -> &[SeriesMarker] {
        &self.markers
    }

    #[must_use]
    pub fn price_lines(&self) -> &[PriceLineOptions] {
        &self.price_lines
    }

    /// Normalizes `input` and replaces the current data.
    ///
    /// On error the previous data is left untouched.
    pub fn set_data(&mut self, input: impl Into<SeriesInput>) -> ChartResult<()> {
        let data = normalize(input.into(), self.kind().family())?;
        debug!(
            series = self.id.raw(),
            kind = ?self.kind(),
            records = data.len(),
            "set series data"
        );
        self.data = data;
        Ok(())
    }

    /// Replaces the user options. The kind of a series cannot change.
    pub fn set_options(&mut self, options: impl Into<SeriesOptions>) -> ChartResult<()> {
        let options = options.into();
        if options.kind() != self.kind() {
            return Err(ChartError::InvalidOption(format!(
                "cannot apply {:?} options to a {:?} series",
                options.kind(),
                self.kind()
            )));
        }
        self.options = options;
        Ok(())
    }

    /// Options as sent to the library: kind defaults under user options.
    pub fn effective_options(&self) -> ChartResult<Map<String, Value>> {
        self.options.effective()
    }

    /// Replaces all markers; they are kept sorted by time.
    pub fn set_markers(&mut self, markers: Vec<SeriesMarker>) -> ChartResult<()> {
        self.markers = canonicalize_markers(markers)?;
        debug!(
            series = self.id.raw(),
            markers = self.markers.len(),
            "set series markers"
        );
        Ok(())
    }

    pub fn create_price_line(&mut self, options: PriceLineOptions) -> ChartResult<()> {
        options.validate()?;
        self.price_lines.push(options);
        Ok(())
    }
}
