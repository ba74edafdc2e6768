// File: crates/linechart-core/src/range.rs
// Summary: Rounded-outward axis ranges with power-of-ten tick resolution.

use crate::error::{PlotError, PlotResult};

/// Lower bound on the data span, keeps `log10` finite for constant series.
pub const MIN_SPAN: f64 = 1e-8;

/// Rounded bound of one axis plus the tick step inside it.
/// Contract: all fields finite, `min <= max`, `resolution > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub resolution: f64,
}

impl Range {
    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Resolved domain for an x/y axis pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub x: Range,
    pub y: Range,
}

/// Resolve one axis over every value in `arrays`.
///
/// `resolution = 10^(floor(log10(span)) - 1)`, then `max` is rounded up and `min` rounded
/// down to a multiple of it, so the range always covers the data and ticks land on round
/// decimal boundaries.
pub fn resolve(arrays: &[&[f64]]) -> PlotResult<Range> {
    if arrays.is_empty() {
        return Err(PlotError::invalid("no arrays to resolve"));
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (i, values) in arrays.iter().enumerate() {
        if values.is_empty() {
            return Err(PlotError::invalid(format!("array {i} is empty")));
        }
        for &v in values.iter() {
            if !v.is_finite() {
                return Err(PlotError::invalid(format!("array {i} holds non-finite value {v}")));
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    let diff = (hi - lo).max(MIN_SPAN);
    let resolution = 10f64.powi(diff.log10().floor() as i32 - 1);
    Ok(Range {
        min: (lo / resolution).floor() * resolution,
        max: (hi / resolution).ceil() * resolution,
        resolution,
    })
}

/// Resolve x and y independently over paired arrays.
/// Fails when the two lists disagree in count or any pair disagrees in length.
pub fn resolve_axes(xs: &[&[f64]], ys: &[&[f64]]) -> PlotResult<AxisRange> {
    if xs.len() != ys.len() {
        return Err(PlotError::invalid(format!(
            "{} x-arrays paired with {} y-arrays",
            xs.len(),
            ys.len()
        )));
    }
    for (i, (x, y)) in xs.iter().zip(ys).enumerate() {
        if x.len() != y.len() {
            return Err(PlotError::invalid(format!(
                "pair {i}: {} x-values vs {} y-values",
                x.len(),
                y.len()
            )));
        }
    }
    Ok(AxisRange { x: resolve(xs)?, y: resolve(ys)? })
}
