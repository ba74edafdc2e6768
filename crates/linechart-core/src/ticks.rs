// File: crates/linechart-core/src/ticks.rs
// Summary: Evenly spaced, sparsified axis ticks paired with their pixel positions.

use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::format::format_value;
use crate::mapper::CoordinateMapper;
use crate::range::Range;

/// One surviving tick: data value, mapped pixel and label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub pixel: i32,
    pub label: String,
}

/// Values from `range.min` in steps of `range.resolution`.
///
/// A step is appended while the previous value is still `<= max`, so the sequence always
/// ends with exactly one value past `max`. When `min` is so large that adding the step no
/// longer changes it, the values gathered so far are returned; `min` is always among them.
pub fn tick_values(range: &Range) -> PlotResult<Vec<f64>> {
    let step = range.resolution;
    if !(step.is_finite() && step > 0.0) {
        return Err(PlotError::invalid(format!("tick resolution must be positive, got {step}")));
    }
    let mut out = vec![range.min];
    let mut last = range.min;
    while last <= range.max {
        let next = last + step;
        if next <= last {
            debug!(resolution = step, value = last, ticks = out.len(), "tick step no longer advances");
            break;
        }
        out.push(next);
        last = next;
    }
    Ok(out)
}

/// Keep every `max(len / target, 1)`-th element, starting with the first.
pub fn sparsify<T: Clone>(items: &[T], target: usize) -> Vec<T> {
    let stride = (items.len() / target.max(1)).max(1);
    items.iter().step_by(stride).cloned().collect()
}

/// Ticks for one axis, sparsified toward `target` and mapped through `mapper`.
pub fn axis_ticks(range: &Range, mapper: &CoordinateMapper, target: usize) -> PlotResult<Vec<Tick>> {
    let values = tick_values(range)?;
    Ok(sparsify(&values, target)
        .into_iter()
        .map(|value| Tick { value, pixel: mapper.map(value), label: format_value(value) })
        .collect())
}
