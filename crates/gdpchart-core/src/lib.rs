// File: crates/gdpchart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart layout and frame building.

pub mod axis;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod series;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use scale::{LinearScale, TimeScale};
pub use scene::{Layout, Primitive, Scene, TextAnchor};
pub use series::{DataPoint, Series};
pub use theme::{Color, Theme};
pub use types::Insets;
pub use view::{ChartState, Event};
