// File: crates/gdpchart-core/src/scene.rs
// Summary: Bar layout and the pure (state, theme) -> drawable-primitive frame builder.

use crate::axis::{self, TICK_OFFSET};
use crate::geometry::RectF;
use crate::scale::{LinearScale, TimeScale};
use crate::series::Series;
use crate::theme::{Color, Theme};
use crate::tooltip;
use crate::types::{self, Insets};
use crate::view::ChartState;

const TITLE: &str = "United States GDP";
const Y_CAPTION: &str = "GDP in Billion USD";
/// Tick count targets matching the original axes.
const Y_TICKS: usize = 10;
const X_TICKS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Renderer-agnostic drawables. A backend maps these 1:1 onto its medium.
#[derive(Clone, Debug)]
pub enum Primitive {
    Rect {
        rect: RectF,
        fill: Color,
        /// Stable identity for incremental re-rendering (bars carry their stamp).
        key: Option<String>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        size: f32,
        color: Color,
    },
}

/// One complete frame: everything to draw, in paint order.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub primitives: Vec<Primitive>,
}

/// One bar's placement, in surface coordinates.
#[derive(Clone, Debug)]
pub struct Bar {
    pub index: usize,
    pub key: String,
    pub rect: RectF,
}

/// Scales and bar rectangles computed from a loaded series. Pure function
/// of the data; hover resolution goes through `bar_at`.
#[derive(Clone, Debug)]
pub struct Layout {
    pub insets: Insets,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub bar_width: f64,
    pub bars: Vec<Bar>,
}

impl Layout {
    /// Compute scales and bars for a non-empty series. The x domain spans
    /// the date extent over `[0, inner_width]`; the y domain spans the
    /// value extent, niced, over `[inner_height, 0]` so larger values sit
    /// higher on screen.
    pub fn of(series: &Series) -> Option<Self> {
        let insets = Insets::default();
        let inner_w = types::inner_width(&insets);
        let inner_h = types::inner_height(&insets);

        let (x0, x1) = series.x_extent()?;
        let (y0, y1) = series.y_extent()?;
        let x_scale = TimeScale::new((x0, x1), (0.0, inner_w));
        let y_scale = LinearScale::new((y0, y1), (inner_h, 0.0)).nice(Y_TICKS);

        let bar_width = inner_w / series.len() as f64;
        let left = insets.left as f64;
        let top = insets.top as f64;
        let bars = series
            .points
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let x = left + x_scale.to_px(p.date);
                let y = top + y_scale.to_px(p.value);
                let height = (top + inner_h) - y;
                Bar {
                    index,
                    key: p.stamp.clone(),
                    rect: RectF::from_ltwh(x, y, bar_width, height),
                }
            })
            .collect();

        Some(Self { insets, x_scale, y_scale, bar_width, bars })
    }

    /// Hit-test a surface-coordinate pointer position against the bars.
    /// This is the seam a shell uses to turn raw pointer moves into
    /// `HoverStart`/`HoverEnd` events.
    pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
        self.bars.iter().find(|b| b.rect.contains(x, y)).map(|b| b.index)
    }
}

impl Scene {
    /// Build the frame for the current state. Pure: same state and theme,
    /// same primitive list.
    pub fn build(state: &ChartState, theme: &Theme) -> Self {
        let mut scene = Scene {
            width: types::WIDTH,
            height: types::HEIGHT,
            primitives: Vec::new(),
        };
        scene.primitives.push(Primitive::Rect {
            rect: RectF::from_ltwh(0.0, 0.0, types::WIDTH as f64, types::HEIGHT as f64),
            fill: theme.background,
            key: None,
        });

        match state {
            ChartState::Loading => scene.center_message("Loading...", theme),
            ChartState::Failed { message } => {
                scene.center_message(&format!("Failed to load data: {}", message), theme);
            }
            ChartState::Ready { series, pointer, .. } => {
                match Layout::of(series) {
                    Some(layout) => {
                        scene.push_titles(series, theme, &layout);
                        scene.push_left_axis(theme, &layout);
                        scene.push_bottom_axis(theme, &layout);
                        scene.push_bars(theme, &layout);
                        scene.push_tooltip(state.hovered(), *pointer, theme);
                    }
                    None => scene.center_message("No data", theme),
                }
            }
        }
        scene
    }

    fn center_message(&mut self, text: &str, theme: &Theme) {
        self.primitives.push(Primitive::Text {
            x: self.width as f64 / 2.0,
            y: self.height as f64 / 2.0,
            text: text.to_string(),
            anchor: TextAnchor::Middle,
            size: theme.tooltip_size,
            color: theme.axis_label,
        });
    }

    fn push_titles(&mut self, series: &Series, theme: &Theme, layout: &Layout) {
        use chrono::Datelike;
        let cx = self.width as f64 / 2.0;
        self.primitives.push(Primitive::Text {
            x: cx,
            y: 28.0,
            text: TITLE.to_string(),
            anchor: TextAnchor::Middle,
            size: theme.title_size,
            color: theme.title,
        });
        if let Some((first, last)) = series.x_extent() {
            self.primitives.push(Primitive::Text {
                x: cx,
                y: 44.0,
                text: format!("({} \u{2014} {})", first.year(), last.year()),
                anchor: TextAnchor::Middle,
                size: theme.label_size,
                color: theme.axis_label,
            });
        }
        self.primitives.push(Primitive::Text {
            x: layout.insets.left as f64 - 90.0,
            y: layout.insets.top as f64 - 10.0,
            text: Y_CAPTION.to_string(),
            anchor: TextAnchor::Start,
            size: theme.label_size,
            color: theme.axis_label,
        });
    }

    /// Horizontal gridlines spanning the full inner width, labels
    /// right-anchored left of the plot.
    fn push_left_axis(&mut self, theme: &Theme, layout: &Layout) {
        let left = layout.insets.left as f64;
        let top = layout.insets.top as f64;
        let inner_w = types::inner_width(&layout.insets);
        for tick in axis::left_ticks(&layout.y_scale, Y_TICKS) {
            let y = top + tick.position;
            self.primitives.push(Primitive::Line {
                x1: left,
                y1: y,
                x2: left + inner_w,
                y2: y,
                stroke: theme.grid,
                width: 1.0,
            });
            self.primitives.push(Primitive::Text {
                x: left - TICK_OFFSET,
                y: y + 4.0,
                text: tick.label,
                anchor: TextAnchor::End,
                size: theme.label_size,
                color: theme.axis_label,
            });
        }
    }

    /// Short vertical marks below the plot, labels centered under them.
    fn push_bottom_axis(&mut self, theme: &Theme, layout: &Layout) {
        let left = layout.insets.left as f64;
        let bottom = layout.insets.top as f64 + types::inner_height(&layout.insets);
        for tick in axis::bottom_ticks(&layout.x_scale, X_TICKS) {
            let x = left + tick.position;
            self.primitives.push(Primitive::Line {
                x1: x,
                y1: bottom,
                x2: x,
                y2: bottom + TICK_OFFSET,
                stroke: theme.grid,
                width: 1.0,
            });
            self.primitives.push(Primitive::Text {
                x,
                y: bottom + TICK_OFFSET + theme.label_size as f64,
                text: tick.label,
                anchor: TextAnchor::Middle,
                size: theme.label_size,
                color: theme.axis_label,
            });
        }
    }

    fn push_bars(&mut self, theme: &Theme, layout: &Layout) {
        for bar in &layout.bars {
            self.primitives.push(Primitive::Rect {
                rect: bar.rect,
                fill: theme.bar_fill,
                key: Some(bar.key.clone()),
            });
        }
    }

    fn push_tooltip(
        &mut self,
        hovered: Option<&crate::series::DataPoint>,
        pointer: (f64, f64),
        theme: &Theme,
    ) {
        let Some(tip) = tooltip::present(hovered, pointer) else {
            return;
        };
        let cx = tip.left + tip.width / 2.0;
        self.primitives.push(Primitive::Rect {
            rect: RectF::from_ltwh(tip.left, tip.top, tip.width, tip.height),
            fill: theme.tooltip_fill,
            key: None,
        });
        self.primitives.push(Primitive::Text {
            x: cx,
            y: tip.top + 22.0,
            text: tip.date_line,
            anchor: TextAnchor::Middle,
            size: theme.tooltip_size,
            color: theme.tooltip_text,
        });
        self.primitives.push(Primitive::Text {
            x: cx,
            y: tip.top + 44.0,
            text: tip.value_line,
            anchor: TextAnchor::Middle,
            size: theme.tooltip_size,
            color: theme.tooltip_text,
        });
    }
}
