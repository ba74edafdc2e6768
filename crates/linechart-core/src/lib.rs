// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; autoscaling coordinate engine and plot sessions.

pub mod engine;
pub mod error;
pub mod format;
pub mod labels;
pub mod line;
pub mod mapper;
pub mod palette;
pub mod range;
pub mod render;
pub mod ticks;
pub mod types;

pub use engine::{GridLine, MappedLine, PlotFrame, PlotSession, TickMark};
pub use error::{PlotError, PlotResult};
pub use format::format_value;
pub use labels::{select_label_indices, value_labels, ValueLabel};
pub use line::Line;
pub use mapper::{CoordinateMapper, Orientation};
pub use palette::{Color, Palette};
pub use range::{resolve, resolve_axes, AxisRange, Range};
pub use render::{CommandRecorder, DrawCommand, Renderer};
pub use ticks::{axis_ticks, sparsify, tick_values, Tick};
pub use types::{CanvasGeometry, PixelRange};
