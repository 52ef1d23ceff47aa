// File: crates/gdpchart-core/src/axis.rs
// Summary: Left/bottom axis layout producing positioned, labeled tick marks.

use crate::format;
use crate::scale::{LinearScale, TimeScale};

/// One positioned axis tick: mapped pixel coordinate along the axis plus
/// its formatted label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Gap in pixels between the plot edge and tick labels.
pub const TICK_OFFSET: f64 = 5.0;

/// Left-axis ticks: one per round value of the niced Y scale. The caller
/// draws a full-inner-width gridline at each `position` and a
/// right-anchored label `TICK_OFFSET` left of the plot.
pub fn left_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|v| Tick { position: scale.to_px(v), label: format::axis_number(v) })
        .collect()
}

/// Bottom-axis ticks: one per January-1st year boundary, labeled `%Y`.
/// The caller draws a short vertical mark and a centered label below it.
pub fn bottom_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    crate::grid::year_ticks(scale.start, scale.end, count)
        .into_iter()
        .map(|d| Tick { position: scale.to_px(d), label: format::year_label(d) })
        .collect()
}
