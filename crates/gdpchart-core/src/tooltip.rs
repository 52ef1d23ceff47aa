// File: crates/gdpchart-core/src/tooltip.rs
// Summary: Hover tooltip content and positioning.

use crate::format;
use crate::series::DataPoint;

/// Pixel offset from the pointer to the tooltip's top-left corner, so the
/// box sits above-left of the cursor instead of under it.
pub const OFFSET_X: f64 = 75.0;
pub const OFFSET_Y: f64 = 90.0;

const BOX_W: f64 = 150.0;
const BOX_H: f64 = 58.0;

/// Laid-out tooltip: a box near the pointer with a quarter line and a
/// value line, both centered.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub date_line: String,
    pub value_line: String,
}

/// Build the tooltip for a hovered point, or `None` when nothing is
/// hovered (the tooltip is simply absent from the frame).
pub fn present(hovered: Option<&DataPoint>, pointer: (f64, f64)) -> Option<Tooltip> {
    let point = hovered?;
    Some(Tooltip {
        left: pointer.0 - OFFSET_X,
        top: pointer.1 - OFFSET_Y,
        width: BOX_W,
        height: BOX_H,
        date_line: format::quarter_label(&point.stamp),
        value_line: format!("${} Billion USD", format::decimal_grouped(point.value)),
    })
}
