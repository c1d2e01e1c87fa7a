use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::render::{RenderConfig, RenderFrame, Renderer};

use super::html::standalone_document;
use super::library::require_library;

/// Writes a self-contained HTML document and optionally opens it.
#[derive(Debug, Clone)]
pub struct StandaloneRenderer {
    config: RenderConfig,
    path: Option<PathBuf>,
    last_path: Option<PathBuf>,
}

impl StandaloneRenderer {
    /// Writes into the configured output directory, named after the content.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            path: None,
            last_path: None,
        }
    }

    /// Writes to `path` and never opens a browser.
    #[must_use]
    pub fn to_path(config: RenderConfig, path: impl Into<PathBuf>) -> Self {
        Self {
            config: config.with_open_browser(false),
            path: Some(path.into()),
            last_path: None,
        }
    }

    #[must_use]
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    pub fn document(&self, frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;
        let library = require_library(self.config.library.as_ref())?;
        Ok(standalone_document(frame, &self.config, &library))
    }

    fn target_path(&self, frame: &RenderFrame) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => self
                .config
                .output_dir_or_temp()
                .join(format!("{}.html", frame.container_id())),
        }
    }
}

impl Renderer for StandaloneRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let html = self.document(frame)?;
        let path = self.target_path(frame);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&path, html.as_bytes())?;
        debug!(path = %path.display(), bytes = html.len(), "wrote standalone chart");

        if self.config.open_browser {
            if let Err(e) = open::that(&path) {
                warn!(path = %path.display(), error = %e, "failed to open browser");
            }
        }
        self.last_path = Some(path);
        Ok(())
    }
}
