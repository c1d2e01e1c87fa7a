use std::collections::BTreeMap;

use tracing::warn;

use crate::api::Pane;

use super::MarkerTooltip;

/// Collects hover tooltips of every marker in `pane` that has both an `id`
/// and a `tooltip`. Ids are unique per series; when two series of the pane
/// share one, the later series wins.
#[must_use]
pub fn collect_marker_tooltips(pane: &Pane) -> BTreeMap<String, MarkerTooltip> {
    let mut tooltips = BTreeMap::new();
    for series in pane.series() {
        for marker in series.markers() {
            if let (Some(id), Some(tooltip)) = (&marker.id, &marker.tooltip) {
                if tooltips.insert(id.clone(), tooltip.clone()).is_some() {
                    warn!(marker_id = %id, "marker id shared across series; later tooltip wins");
                }
            }
        }
    }
    tooltips
}
