// File: crates/linechart-core/src/palette.rs
// Summary: Fixed color table for lines, grid, tick text and background.

/// Renderer-neutral RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const CYAN: Color = Color::from_rgb(0, 255, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::from_rgb(255, 0, 255);
    pub const GREY: Color = Color::from_rgb(190, 190, 190);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
}

/// Immutable color table handed to a plot session.
/// Line colors are cycled by line index once there are more lines than entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    lines: Vec<Color>,
    pub grid: Color,
    pub text: Color,
    pub background: Color,
}

impl Palette {
    /// red, green, blue, cyan, yellow, magenta on white with grey grid lines.
    pub fn standard() -> Self {
        Self {
            lines: vec![Color::RED, Color::GREEN, Color::BLUE, Color::CYAN, Color::YELLOW, Color::MAGENTA],
            grid: Color::GREY,
            text: Color::BLACK,
            background: Color::WHITE,
        }
    }

    /// Build a palette with custom line colors; falls back to the standard set when `lines` is empty.
    pub fn with_lines(lines: Vec<Color>) -> Self {
        if lines.is_empty() { return Self::standard(); }
        Self { lines, ..Self::standard() }
    }

    pub fn len(&self) -> usize { self.lines.len() }

    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    pub fn color_for(&self, line_index: usize) -> Color {
        self.lines[line_index % self.lines.len()]
    }
}

impl Default for Palette {
    fn default() -> Self { Self::standard() }
}
