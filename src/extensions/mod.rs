//! Additions layered on top of the plain series model: markers, price lines
//! and the marker hover tooltips the bundled library does not provide.

pub mod markers;
pub mod price_lines;
pub mod tooltips;

pub use markers::{
    MarkerPosition, MarkerShape, MarkerTooltip, SeriesMarker, canonicalize_markers,
};
pub use price_lines::PriceLineOptions;
pub use tooltips::collect_marker_tooltips;
