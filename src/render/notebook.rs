use std::io::{Stdout, Write};

use tracing::debug;

use crate::error::ChartResult;
use crate::render::{RenderConfig, RenderFrame, Renderer};

use super::html::{iframe_fragment, standalone_document};
use super::library::require_library;

pub const EVCXR_BEGIN: &str = "EVCXR_BEGIN_CONTENT text/html";
pub const EVCXR_END: &str = "EVCXR_END_CONTENT";

/// Emits an inline iframe through the evcxr rich display protocol.
///
/// The iframe isolates the chart from the notebook page, so several charts in
/// one notebook never share globals.
#[derive(Debug)]
pub struct NotebookRenderer<W: Write> {
    writer: W,
    config: RenderConfig,
}

impl NotebookRenderer<Stdout> {
    #[must_use]
    pub fn stdout(config: RenderConfig) -> Self {
        Self::new(std::io::stdout(), config)
    }
}

impl<W: Write> NotebookRenderer<W> {
    #[must_use]
    pub fn new(writer: W, config: RenderConfig) -> Self {
        Self { writer, config }
    }

    /// Iframe markup without the display protocol wrapper.
    pub fn fragment(&self, frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;
        let library = require_library(self.config.library.as_ref())?;
        let document = standalone_document(frame, &self.config, &library);
        Ok(iframe_fragment(frame, &self.config, &document))
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for NotebookRenderer<W> {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let fragment = self.fragment(frame)?;
        writeln!(self.writer, "{EVCXR_BEGIN}")?;
        writeln!(self.writer, "{fragment}")?;
        writeln!(self.writer, "{EVCXR_END}")?;
        self.writer.flush()?;
        debug!(
            container_id = frame.container_id(),
            bytes = fragment.len(),
            "emitted notebook fragment"
        );
        Ok(())
    }
}
