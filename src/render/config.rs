use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::LibrarySource;

pub const LIBRARY_PATH_ENV: &str = "LITECHART_LIBRARY_PATH";
pub const OUTPUT_DIR_ENV: &str = "LITECHART_OUTPUT_DIR";

/// Page-level settings shared by the standalone and notebook targets.
///
/// Every field has a default, so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_page_background")]
    pub page_background: String,
    #[serde(default = "default_padding_px")]
    pub padding_px: u32,
    /// Directory for standalone files; the OS temp dir when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub library: Option<LibrarySource>,
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_background: default_page_background(),
            padding_px: default_padding_px(),
            output_dir: None,
            library: None,
            open_browser: default_open_browser(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Defaults plus environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Empty values are ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(path) = read(LIBRARY_PATH_ENV) {
            self.library = Some(LibrarySource::File(PathBuf::from(path)));
        }
        if let Some(dir) = read(OUTPUT_DIR_ENV) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        self
    }

    #[must_use]
    pub fn with_library(mut self, library: LibrarySource) -> Self {
        self.library = Some(library);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    #[must_use]
    pub fn output_dir_or_temp(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

fn default_title() -> String {
    "Chart".to_owned()
}

fn default_page_background() -> String {
    "#1e1e1e".to_owned()
}

fn default_padding_px() -> u32 {
    20
}

fn default_open_browser() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RenderConfig::from_json_str(r#"{"title":"BTC"}"#).expect("config");
        assert_eq!(config.title, "BTC");
        assert_eq!(config.padding_px, 20);
        assert!(config.open_browser);
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = RenderConfig::default().with_overrides_from(|key| match key {
            LIBRARY_PATH_ENV => Some("  ".to_owned()),
            OUTPUT_DIR_ENV => Some("/tmp/charts".to_owned()),
            _ => None,
        });
        assert_eq!(config.library, None);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/charts")));
    }
}
