// File: crates/gdpchart-core/src/theme.rs
// Summary: Fixed presentation constants (colors, font sizes) for chart rendering.

/// 8-bit RGBA color, serializable to CSS for SVG output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub bar_fill: Color,
    pub axis_label: Color,
    pub title: Color,
    pub tooltip_fill: Color,
    pub tooltip_text: Color,
    pub label_size: f32,
    pub title_size: f32,
    pub tooltip_size: f32,
}

impl Theme {
    /// Presentation of the original visualization: steelblue bars on white,
    /// #f1f2f3 gridlines.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 255, 255, 255),
            grid: Color::from_argb(255, 0xf1, 0xf2, 0xf3),
            bar_fill: Color::from_argb(255, 70, 130, 180), // steelblue
            axis_label: Color::from_argb(255, 60, 60, 70),
            title: Color::from_argb(255, 20, 20, 30),
            tooltip_fill: Color::from_argb(230, 0xdc, 0xe8, 0xf2),
            tooltip_text: Color::from_argb(255, 20, 20, 30),
            label_size: 12.0,
            title_size: 24.0,
            tooltip_size: 14.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            bar_fill: Color::from_argb(255, 96, 156, 255),
            axis_label: Color::from_argb(255, 180, 180, 190),
            title: Color::from_argb(255, 235, 235, 245),
            tooltip_fill: Color::from_argb(230, 40, 40, 48),
            tooltip_text: Color::from_argb(255, 235, 235, 245),
            label_size: 12.0,
            title_size: 24.0,
            tooltip_size: 14.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
