// File: crates/linechart-window/src/main.rs
// Summary: CLI entry; validates the session list, then runs one session or launches all of them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linechart_core::Palette;
use linechart_render_skia::SkiaRenderer;
use linechart_window::{build_session, launch_all, load_config, validate, window, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render CSV columns as autoscaled line charts, one window per session
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session list (.json): [{"file", "index", "title", "share_coordinate"?, "separator"?}]
    config: PathBuf,

    /// Run only the session at this position of the list, in this process
    #[arg(long)]
    session: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let palette = Palette::standard();
    let sessions = load_config(&cli.config)?;
    validate(&sessions, palette.len())?;

    match cli.session {
        Some(i) => {
            let cfg = sessions
                .get(i)
                .with_context(|| format!("session {i} not in config ({} sessions)", sessions.len()))?;
            run_session(cfg, &palette)
        }
        None => {
            let exe = std::env::current_exe().context("locating own executable")?;
            launch_all(exe, &cli.config, sessions.len())
        }
    }
}

fn run_session(cfg: &SessionConfig, palette: &Palette) -> Result<()> {
    let session = build_session(cfg, palette)?;
    let mut renderer = SkiaRenderer::for_geometry(session.geometry(), palette)?;
    session
        .render(&mut renderer)
        .with_context(|| format!("rendering '{}'", cfg.title))?;
    let frame = renderer.take_frame().context("renderer produced no frame")?;
    info!(title = renderer.title(), lines = session.lines().len(), "showing chart");
    window::show(frame, renderer.title())
}
