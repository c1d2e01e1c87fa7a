//! litechart: declarative Lightweight Charts specifications for Rust.
//!
//! Build a chart tree (chart → panes → series), feed it rows, frames or
//! numeric arrays, and render it inline in an evcxr notebook or as a
//! self-contained HTML page.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartOptions, PaneOptions, create_chart};
pub use error::{ChartError, ChartResult};
pub use render::{DisplayTarget, RenderConfig};
