// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia renderer crate; draws plot sessions onto a CPU raster surface and snapshots RGBA frames.

pub mod text;

use anyhow::{anyhow, bail, Result};
use linechart_core::{CanvasGeometry, Color, Palette, Renderer};
use skia_safe as skia;
use tracing::trace;

pub use text::TextShaper;

/// Snapshot of the surface in RGBA8, unpremultiplied.
#[derive(Clone, Debug)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl Frame {
    /// RGBA of one pixel, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height { return None; }
        let i = y as usize * self.stride + x as usize * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }
}

pub struct SkiaRenderer {
    surface: skia::Surface,
    text: TextShaper,
    title: String,
    frame: Option<Frame>,
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

// Offset integer pixel coordinates onto pixel centres so 1px strokes stay crisp.
#[inline]
fn px(v: i32) -> f32 { v as f32 + 0.5 }

impl SkiaRenderer {
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            bail!("surface size must be positive, got {width}x{height}");
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(to_skia(background));
        Ok(Self { surface, text: TextShaper::new(), title: String::new(), frame: None })
    }

    pub fn for_geometry(geometry: CanvasGeometry, palette: &Palette) -> Result<Self> {
        Self::new(geometry.width, geometry.height, palette.background)
    }

    pub fn title(&self) -> &str { &self.title }

    pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }

    pub fn take_frame(&mut self) -> Option<Frame> { self.frame.take() }

    fn stroke(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint
    }
}

impl Renderer for SkiaRenderer {
    fn draw_line(&mut self, points: &[(i32, i32)], color: Color) -> Result<()> {
        let paint = Self::stroke(color);
        let canvas = self.surface.canvas();
        match points {
            [] => {}
            [(x, y)] => { canvas.draw_point((px(*x), px(*y)), &paint); }
            [(x0, y0), rest @ ..] => {
                let mut path = skia::Path::new();
                path.move_to((px(*x0), px(*y0)));
                for &(x, y) in rest {
                    path.line_to((px(x), px(y)));
                }
                canvas.draw_path(&path, &paint);
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> Result<()> {
        let canvas = self.surface.canvas();
        self.text.draw_centered(canvas, text, x as f32, y as f32, text::LABEL_SIZE, to_skia(color));
        Ok(())
    }

    fn draw_grid_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Result<()> {
        let paint = Self::stroke(color);
        self.surface.canvas().draw_line((px(x1), px(y1)), (px(x2), px(y2)), &paint);
        Ok(())
    }

    fn set_window_title(&mut self, title: &str) -> Result<()> {
        self.title = title.to_string();
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("reading {w}x{h} surface pixels failed");
        }
        trace!(width = w, height = h, "frame presented");
        self.frame = Some(Frame { pixels, width: w as u32, height: h as u32, stride });
        Ok(())
    }
}
