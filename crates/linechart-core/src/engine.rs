// File: crates/linechart-core/src/engine.rs
// Summary: Plot session orchestration: resolve ranges, map lines, lay out ticks and labels, drive a renderer.

use anyhow::Result;
use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::labels::{value_labels, ValueLabel};
use crate::line::Line;
use crate::mapper::CoordinateMapper;
use crate::palette::{Color, Palette};
use crate::range::{resolve_axes, AxisRange};
use crate::render::Renderer;
use crate::ticks::axis_ticks;
use crate::types::{CanvasGeometry, X_TICK_TARGET, Y_TICK_TARGET};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Grid line plus the tick text that goes with it.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub grid: GridLine,
    pub label_x: i32,
    pub label_y: i32,
    pub label: String,
}

/// One line after mapping into screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct MappedLine {
    pub range: AxisRange,
    pub points: Vec<(i32, i32)>,
    pub color: Color,
    pub labels: Vec<ValueLabel>,
}

/// Everything a renderer needs for one session, in screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotFrame {
    pub title: String,
    /// Present only when lines share coordinates.
    pub shared_range: Option<AxisRange>,
    pub x_ticks: Vec<TickMark>,
    pub y_ticks: Vec<TickMark>,
    pub lines: Vec<MappedLine>,
}

/// Ordered lines drawn onto one fixed-size canvas.
pub struct PlotSession {
    title: String,
    lines: Vec<Line>,
    geometry: CanvasGeometry,
    palette: Palette,
    share_coordinates: bool,
}

impl PlotSession {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            geometry: CanvasGeometry::default(),
            palette: Palette::standard(),
            share_coordinates: true,
        }
    }

    pub fn with_geometry(mut self, geometry: CanvasGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn share_coordinates(mut self, share: bool) -> Self {
        self.share_coordinates = share;
        self
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Add a line colored by its position in the session palette.
    pub fn add_series(&mut self, xs: Vec<f64>, ys: Vec<f64>) -> PlotResult<()> {
        let color = self.palette.color_for(self.lines.len());
        self.add_line(Line::new(xs, ys, color)?);
        Ok(())
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn lines(&self) -> &[Line] { &self.lines }
    pub fn geometry(&self) -> CanvasGeometry { self.geometry }
    pub fn palette(&self) -> &Palette { &self.palette }
    pub fn is_shared(&self) -> bool { self.share_coordinates }

    /// Compute the full screen-space layout without drawing anything.
    pub fn plan(&self) -> PlotResult<PlotFrame> {
        if self.lines.is_empty() {
            return Err(PlotError::EmptySession);
        }
        for (i, l) in self.lines.iter().enumerate() {
            if l.xs().len() != l.ys().len() {
                return Err(PlotError::LineMismatch { line: i, xs: l.xs().len(), ys: l.ys().len() });
            }
        }

        let mut frame = PlotFrame {
            title: self.title.clone(),
            shared_range: None,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            lines: Vec::with_capacity(self.lines.len()),
        };

        if self.share_coordinates {
            let xs: Vec<&[f64]> = self.lines.iter().map(Line::xs).collect();
            let ys: Vec<&[f64]> = self.lines.iter().map(Line::ys).collect();
            let range = resolve_axes(&xs, &ys)?;
            debug!(?range, lines = self.lines.len(), "resolved shared axis range");
            frame.x_ticks = self.x_tick_marks(&range)?;
            frame.y_ticks = self.y_tick_marks(&range)?;
            frame.shared_range = Some(range);
        }

        for (i, line) in self.lines.iter().enumerate() {
            let range = match frame.shared_range {
                Some(r) => r,
                None => {
                    let r = resolve_axes(&[line.xs()], &[line.ys()])?;
                    debug!(line = i, ?r, "resolved per-line axis range");
                    r
                }
            };
            frame.lines.push(self.map_line(i, line, range)?);
        }
        Ok(frame)
    }

    /// Draw the session: title, shared grid and ticks, then each polyline followed by its value labels.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let frame = self.plan()?;
        let grid = self.palette.grid;
        let text = self.palette.text;

        renderer.set_window_title(&frame.title)?;
        for t in frame.x_ticks.iter().chain(&frame.y_ticks) {
            renderer.draw_grid_line(t.grid.x1, t.grid.y1, t.grid.x2, t.grid.y2, grid)?;
            renderer.draw_text(t.label_x, t.label_y, &t.label, text)?;
        }
        for line in &frame.lines {
            renderer.draw_line(&line.points, line.color)?;
            for label in &line.labels {
                renderer.draw_text(label.x, label.y, &label.text, label.color)?;
            }
        }
        renderer.present()
    }

    fn mappers(&self, range: &AxisRange) -> PlotResult<(CoordinateMapper, CoordinateMapper)> {
        let g = self.geometry;
        Ok((
            CoordinateMapper::horizontal(range.x, g.x_pixels())?,
            CoordinateMapper::vertical(range.y, g.y_pixels(), g.height)?,
        ))
    }

    fn map_line(&self, index: usize, line: &Line, range: AxisRange) -> PlotResult<MappedLine> {
        let (mx, my) = self.mappers(&range)?;
        let xs_px = mx.map_all(line.xs());
        let ys_px = my.map_all(line.ys());
        if xs_px.len() != ys_px.len() {
            return Err(PlotError::LineMismatch { line: index, xs: xs_px.len(), ys: ys_px.len() });
        }
        let labels = value_labels(line.ys(), &xs_px, &ys_px, line.color())?;
        Ok(MappedLine {
            range,
            points: xs_px.into_iter().zip(ys_px).collect(),
            color: line.color(),
            labels,
        })
    }

    // Vertical grid lines from the top edge down to the plot bottom; text sits in the bottom margin.
    fn x_tick_marks(&self, range: &AxisRange) -> PlotResult<Vec<TickMark>> {
        let g = self.geometry;
        let (mx, _) = self.mappers(range)?;
        Ok(axis_ticks(&range.x, &mx, X_TICK_TARGET)?
            .into_iter()
            .map(|t| TickMark {
                grid: GridLine { x1: t.pixel, y1: 0, x2: t.pixel, y2: g.height - g.margin },
                label_x: t.pixel,
                label_y: g.height - g.margin / 2,
                label: t.label,
            })
            .collect())
    }

    // Horizontal grid lines from the left margin to the right edge; text sits on the margin.
    fn y_tick_marks(&self, range: &AxisRange) -> PlotResult<Vec<TickMark>> {
        let g = self.geometry;
        let (_, my) = self.mappers(range)?;
        Ok(axis_ticks(&range.y, &my, Y_TICK_TARGET)?
            .into_iter()
            .map(|t| TickMark {
                grid: GridLine { x1: g.margin, y1: t.pixel, x2: g.width, y2: t.pixel },
                label_x: g.margin,
                label_y: t.pixel,
                label: t.label,
            })
            .collect())
    }
}
