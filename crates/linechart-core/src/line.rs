// File: crates/linechart-core/src/line.rs
// Summary: Line model: paired x/y values plus a display color.

use crate::error::{PlotError, PlotResult};
use crate::palette::Color;

/// One plotted sequence. Contract: `xs` and `ys` are non-empty and equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    xs: Vec<f64>,
    ys: Vec<f64>,
    color: Color,
}

impl Line {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, color: Color) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::invalid(format!(
                "length not matched: {} x-values vs {} y-values",
                xs.len(),
                ys.len()
            )));
        }
        if ys.is_empty() {
            return Err(PlotError::invalid("line is empty"));
        }
        Ok(Self { xs, ys, color })
    }

    /// Use the row index `0..n` as x.
    pub fn from_ys(ys: Vec<f64>, color: Color) -> PlotResult<Self> {
        let xs = (0..ys.len()).map(|i| i as f64).collect();
        Self::new(xs, ys, color)
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn color(&self) -> Color { self.color }
    pub fn len(&self) -> usize { self.ys.len() }
    pub fn is_empty(&self) -> bool { self.ys.is_empty() }
}
