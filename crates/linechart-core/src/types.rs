// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margin, pixel ranges).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 600;
/// Default margin around the plot area, in pixels.
pub const MARGIN: i32 = 30;

/// Target tick count along the x axis after sparsifying.
pub const X_TICK_TARGET: usize = 10;
/// Target tick count along the y axis after sparsifying.
pub const Y_TICK_TARGET: usize = 6;

/// Integer pixel bounds for one screen axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRange {
    pub min: i32,
    pub max: i32,
}

impl PixelRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
    pub const fn span(&self) -> i32 { self.max - self.min }
}

/// Fixed canvas size and margin for one session.
/// Contract: `width` and `height` exceed twice the margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
}

impl CanvasGeometry {
    pub const fn new(width: i32, height: i32, margin: i32) -> Self {
        Self { width, height, margin }
    }

    /// Horizontal destination range: `[margin, width - margin]`.
    pub const fn x_pixels(&self) -> PixelRange {
        PixelRange::new(self.margin, self.width - self.margin)
    }

    /// Vertical destination range before the screen flip: `[margin, height - margin]`.
    pub const fn y_pixels(&self) -> PixelRange {
        PixelRange::new(self.margin, self.height - self.margin)
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, MARGIN)
    }
}
