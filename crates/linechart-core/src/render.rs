// File: crates/linechart-core/src/render.rs
// Summary: Drawing capability consumed by plot sessions, plus a recorder that captures draw calls.

use anyhow::Result;

use crate::palette::Color;

/// Target surface a session draws into. Coordinates are screen pixels, y growing downward.
pub trait Renderer {
    fn draw_line(&mut self, points: &[(i32, i32)], color: Color) -> Result<()>;
    /// Text is centred on `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> Result<()>;
    fn draw_grid_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Result<()>;
    fn set_window_title(&mut self, title: &str) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { points: Vec<(i32, i32)>, color: Color },
    Text { x: i32, y: i32, text: String, color: Color },
    GridLine { x1: i32, y1: i32, x2: i32, y2: i32, color: Color },
    Title(String),
    Present,
}

/// Renderer that only records what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self { Self::default() }

    pub fn lines(&self) -> impl Iterator<Item = (&[(i32, i32)], Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::GridLine { .. }))
    }
}

impl Renderer for CommandRecorder {
    fn draw_line(&mut self, points: &[(i32, i32)], color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Line { points: points.to_vec(), color });
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Text { x, y, text: text.to_string(), color });
        Ok(())
    }

    fn draw_grid_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::GridLine { x1, y1, x2, y2, color });
        Ok(())
    }

    fn set_window_title(&mut self, title: &str) -> Result<()> {
        self.commands.push(DrawCommand::Title(title.to_string()));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
