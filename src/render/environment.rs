use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ChartError;

pub const TARGET_ENV: &str = "LITECHART_TARGET";
pub const EVCXR_RUNTIME_ENV: &str = "EVCXR_IS_RUNTIME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTarget {
    /// Inline output in an evcxr notebook cell.
    Notebook,
    /// HTML file opened in the system browser.
    Standalone,
}

impl fmt::Display for DisplayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notebook => f.write_str("notebook"),
            Self::Standalone => f.write_str("standalone"),
        }
    }
}

impl FromStr for DisplayTarget {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notebook" | "jupyter" => Ok(Self::Notebook),
            "standalone" | "browser" | "html" => Ok(Self::Standalone),
            other => Err(ChartError::InvalidOption(format!(
                "unknown display target: {other}"
            ))),
        }
    }
}

/// Strategy that picks a display target when none is given.
pub trait EnvironmentProbe {
    fn detect(&self) -> DisplayTarget;
}

/// Reads process environment variables.
///
/// `LITECHART_TARGET` wins when it names a valid target; otherwise an evcxr
/// runtime means notebook output and anything else means standalone.
#[derive(Debug, Clone, Copy)]
pub struct EnvProbe {
    lookup: fn(&str) -> Option<String>,
}

impl EnvProbe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }

    /// Probe over a custom variable source.
    #[must_use]
    pub fn with_lookup(lookup: fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }
}

impl Default for EnvProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProbe for EnvProbe {
    fn detect(&self) -> DisplayTarget {
        if let Some(raw) = (self.lookup)(TARGET_ENV) {
            match raw.parse::<DisplayTarget>() {
                Ok(target) => {
                    debug!(%target, "display target from environment override");
                    return target;
                }
                Err(e) => warn!(value = %raw, error = %e, "ignoring display target override"),
            }
        }
        let target = if (self.lookup)(EVCXR_RUNTIME_ENV).is_some() {
            DisplayTarget::Notebook
        } else {
            DisplayTarget::Standalone
        };
        debug!(%target, "detected display target");
        target
    }
}

/// Always answers with the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub DisplayTarget);

impl EnvironmentProbe for FixedProbe {
    fn detect(&self) -> DisplayTarget {
        self.0
    }
}
