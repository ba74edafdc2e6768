// File: crates/linechart-window/src/window.rs
// Summary: Fixed-size window that blits a rendered RGBA frame via winit + softbuffer until closed.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use linechart_render_skia::Frame;
use tracing::error;
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Pack RGBA into softbuffer's 0RGB layout, clipped to `width x height`.
fn blit(frame: &Frame, dst: &mut [u32], width: u32, height: u32) {
    let w = width.min(frame.width) as usize;
    let h = height.min(frame.height) as usize;
    for y in 0..h {
        let src = &frame.pixels[y * frame.stride..y * frame.stride + w * 4];
        let row = &mut dst[y * width as usize..y * width as usize + w];
        for (out, px) in row.iter_mut().zip(src.chunks_exact(4)) {
            *out = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
    }
}

/// Open a window showing `frame`. Returns only on setup failure; the event loop exits the process.
pub fn show(frame: Frame, title: &str) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::PhysicalSize::new(frame.width, frame.height))
        .with_resizable(false)
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::NewEvents(StartCause::Init) => window.request_redraw(),
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *cf = ControlFlow::Exit;
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                let drawn = surface.resize(w, h).and_then(|_| {
                    let mut buffer = surface.buffer_mut()?;
                    buffer.fill(0x00FF_FFFF);
                    blit(&frame, &mut buffer, w.get(), h.get());
                    buffer.present()
                });
                if let Err(e) = drawn {
                    error!("present error: {e:?}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
