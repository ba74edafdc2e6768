// File: crates/linechart-core/src/mapper.rs
// Summary: Affine data-to-pixel mapping with truncation and vertical screen flip.

use crate::error::{PlotError, PlotResult};
use crate::range::Range;
use crate::types::PixelRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    /// Screen y grows downward; holds the canvas height used for the flip.
    Vertical { canvas_height: i32 },
}

/// Maps values of a resolved source range onto a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    src_min: f64,
    dst_min: i32,
    // zero when the source span is zero: every value lands on dst_min
    scale: f64,
    orientation: Orientation,
}

impl CoordinateMapper {
    pub fn horizontal(src: Range, dst: PixelRange) -> PlotResult<Self> {
        Self::new(src, dst, Orientation::Horizontal)
    }

    pub fn vertical(src: Range, dst: PixelRange, canvas_height: i32) -> PlotResult<Self> {
        Self::new(src, dst, Orientation::Vertical { canvas_height })
    }

    pub fn new(src: Range, dst: PixelRange, orientation: Orientation) -> PlotResult<Self> {
        let span = src.max - src.min;
        if !span.is_finite() || span < 0.0 {
            return Err(PlotError::DegenerateRange { min: src.min, max: src.max });
        }
        let scale = if span == 0.0 { 0.0 } else { dst.span() as f64 / span };
        Ok(Self { src_min: src.min, dst_min: dst.min, scale, orientation })
    }

    /// Truncates toward zero after the affine step, so results may drift by one pixel.
    #[inline]
    pub fn map(&self, v: f64) -> i32 {
        let px = ((v - self.src_min) * self.scale + self.dst_min as f64) as i32;
        match self.orientation {
            Orientation::Horizontal => px,
            Orientation::Vertical { canvas_height } => canvas_height - 1 - px,
        }
    }

    pub fn map_all(&self, values: &[f64]) -> Vec<i32> {
        values.iter().map(|&v| self.map(v)).collect()
    }
}
