// File: crates/gdpchart-core/src/view.rs
// Summary: First-class chart state machine: Loading -> Ready/Failed, hover and pointer tracking.

use crate::series::Series;

/// Everything that can happen to the chart after mount.
#[derive(Clone, Debug)]
pub enum Event {
    /// The one-shot fetch completed and decoded.
    DataLoaded(Series),
    /// The one-shot fetch failed (network or decode).
    FetchFailed(String),
    /// Pointer entered bar `i` (dataset index).
    HoverStart(usize),
    /// Pointer left whatever bar it was over.
    HoverEnd,
    /// Pointer moved over the drawing surface, screen coordinates.
    PointerMove { x: f64, y: f64 },
}

/// Chart lifecycle. `Loading -> Ready` and `Loading -> Failed` each fire at
/// most once; data events arriving in any other state are ignored, which
/// also covers a late response landing after the view moved on.
#[derive(Clone, Debug)]
pub enum ChartState {
    Loading,
    Ready {
        series: Series,
        /// Index into `series.points` of the hovered bar, if any.
        hover: Option<usize>,
        /// Last known pointer position, screen coordinates.
        pointer: (f64, f64),
    },
    Failed { message: String },
}

impl ChartState {
    pub fn new() -> Self {
        ChartState::Loading
    }

    /// Apply one event, returning whether anything observable changed.
    /// Hover transitions are idempotent; re-entering the same bar is a no-op.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::DataLoaded(series) => {
                if !self.is_loading() {
                    return false;
                }
                *self = ChartState::Ready { series, hover: None, pointer: (0.0, 0.0) };
                true
            }
            Event::FetchFailed(message) => {
                if !self.is_loading() {
                    return false;
                }
                *self = ChartState::Failed { message };
                true
            }
            Event::HoverStart(i) => match self {
                ChartState::Ready { series, hover, .. } => {
                    if i >= series.len() || *hover == Some(i) {
                        return false;
                    }
                    *hover = Some(i);
                    true
                }
                _ => false,
            },
            Event::HoverEnd => match self {
                ChartState::Ready { hover, .. } => hover.take().is_some(),
                _ => false,
            },
            Event::PointerMove { x, y } => match self {
                ChartState::Ready { hover, pointer, .. } => {
                    *pointer = (x, y);
                    // Position only shows through the tooltip, so moves while
                    // nothing is hovered are not observable.
                    hover.is_some()
                }
                _ => false,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ChartState::Loading)
    }

    /// The hovered data point, if the chart is ready and a bar is hovered.
    pub fn hovered(&self) -> Option<&crate::series::DataPoint> {
        match self {
            ChartState::Ready { series, hover: Some(i), .. } => series.points.get(*i),
            _ => None,
        }
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}
