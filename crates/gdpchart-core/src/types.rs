// File: crates/gdpchart-core/src/types.rs
// Summary: Shared types and constants (surface size, margins).

/// Surface width in logical pixels.
pub const WIDTH: i32 = 960;
/// Surface height in logical pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 20, 50, 20)
    }
}

/// Inner drawable width for the default surface (840 px).
pub const fn inner_width(insets: &Insets) -> f64 {
    (WIDTH as u32 - insets.hsum()) as f64
}

/// Inner drawable height for the default surface (430 px).
pub const fn inner_height(insets: &Insets) -> f64 {
    (HEIGHT as u32 - insets.vsum()) as f64
}
