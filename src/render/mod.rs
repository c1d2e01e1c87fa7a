mod config;
mod environment;
mod frame;
mod html;
mod layout;
mod library;
mod notebook;
mod null_renderer;
mod standalone;

pub use config::{LIBRARY_PATH_ENV, OUTPUT_DIR_ENV, RenderConfig};
pub use environment::{
    DisplayTarget, EVCXR_RUNTIME_ENV, EnvProbe, EnvironmentProbe, FixedProbe, TARGET_ENV,
};
pub use frame::RenderFrame;
pub use layout::pane_heights;
pub use library::LibrarySource;
pub use notebook::{EVCXR_BEGIN, EVCXR_END, NotebookRenderer};
pub use null_renderer::NullRenderer;
pub use standalone::StandaloneRenderer;

use crate::error::ChartResult;

/// Contract implemented by every output target.
///
/// Targets receive a fully built, deterministic `RenderFrame`, so they only
/// deal with embedding and delivery.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
