use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that produces no output.
///
/// It still validates the frame and records its size, which is enough for
/// tests and headless checks.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_pane_count: usize,
    pub last_series_count: usize,
    pub last_record_count: usize,
    pub last_config_json: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_pane_count = frame.pane_count();
        self.last_series_count = frame.series_count();
        self.last_record_count = frame.record_count();
        self.last_config_json = Some(frame.config_json().to_owned());
        Ok(())
    }
}
