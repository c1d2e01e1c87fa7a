use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

/// Where the Lightweight Charts script comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibrarySource {
    /// Script text embedded as-is.
    Inline(String),
    /// Script file read at render time and embedded.
    File(PathBuf),
    /// Remote script tag. Output is no longer self-contained.
    Url(String),
}

/// Script ready to be placed in a document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LibraryScript {
    Embedded(String),
    External(String),
}

impl LibrarySource {
    pub(crate) fn load(&self) -> ChartResult<LibraryScript> {
        match self {
            Self::Inline(text) => Ok(LibraryScript::Embedded(text.clone())),
            Self::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    ChartError::Render(format!(
                        "failed to read library script {}: {e}",
                        path.display()
                    ))
                })?;
                debug!(path = %path.display(), bytes = text.len(), "loaded library script");
                Ok(LibraryScript::Embedded(text))
            }
            Self::Url(url) => {
                warn!(%url, "library loaded from url; output is not self-contained");
                Ok(LibraryScript::External(url.clone()))
            }
        }
    }
}

pub(crate) fn require_library(source: Option<&LibrarySource>) -> ChartResult<LibraryScript> {
    source
        .ok_or_else(|| {
            ChartError::Render(
                "no library script configured; set RenderConfig::library or LITECHART_LIBRARY_PATH"
                    .to_owned(),
            )
        })?
        .load()
}
