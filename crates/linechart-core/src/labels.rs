// File: crates/linechart-core/src/labels.rs
// Summary: Picks a few well-separated data points per line to annotate with their values.

use std::collections::BTreeSet;

use crate::error::{PlotError, PlotResult};
use crate::format::format_value;
use crate::palette::Color;
use crate::ticks::sparsify;

/// Number of evenly spaced candidates sampled along a line.
pub const LABEL_SAMPLES: usize = 6;
/// Vertical gap between a point and its value text, in pixels.
pub const LABEL_OFFSET_PX: i32 = 10;

/// Value text anchored above one data point.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color,
}

/// Indices to annotate: first argmax and first argmin, then evenly spaced samples whose
/// index distance to every admitted index exceeds `len / (2 * LABEL_SAMPLES)`.
pub fn select_label_indices(ys: &[f64]) -> PlotResult<BTreeSet<usize>> {
    if ys.is_empty() {
        return Err(PlotError::invalid("cannot label an empty line"));
    }
    let (mut i_max, mut i_min) = (0usize, 0usize);
    for (i, &v) in ys.iter().enumerate() {
        if v > ys[i_max] { i_max = i; }
        if v < ys[i_min] { i_min = i; }
    }

    let half_interval = ys.len() / (LABEL_SAMPLES * 2);
    let mut selected: BTreeSet<usize> = [i_max, i_min].into_iter().collect();
    let candidates: Vec<usize> = (0..ys.len()).collect();
    for i in sparsify(&candidates, LABEL_SAMPLES) {
        if selected.iter().all(|&m| i.abs_diff(m) > half_interval) {
            selected.insert(i);
        }
    }
    Ok(selected)
}

/// Resolve selected indices into positioned, formatted labels.
pub fn value_labels(ys: &[f64], xs_px: &[i32], ys_px: &[i32], color: Color) -> PlotResult<Vec<ValueLabel>> {
    if xs_px.len() != ys.len() || ys_px.len() != ys.len() {
        return Err(PlotError::invalid(format!(
            "{} values vs {}/{} pixel positions",
            ys.len(),
            xs_px.len(),
            ys_px.len()
        )));
    }
    Ok(select_label_indices(ys)?
        .into_iter()
        .map(|i| ValueLabel {
            index: i,
            x: xs_px[i],
            y: ys_px[i] - LABEL_OFFSET_PX,
            text: format_value(ys[i]),
            color,
        })
        .collect())
}
