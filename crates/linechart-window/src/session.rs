// File: crates/linechart-window/src/session.rs
// Summary: Turns one session config plus its CSV table into a plot session.

use anyhow::{Context, Result};
use linechart_core::{Palette, PlotSession};
use tracing::info;

use crate::config::SessionConfig;
use crate::source::{load_table, Table};

pub fn build_session(cfg: &SessionConfig, palette: &Palette) -> Result<PlotSession> {
    let table = load_table(&cfg.file, cfg.separator)?;
    info!(file = %cfg.file.display(), rows = table.rows(), columns = table.columns(), "loaded table");
    session_from_table(cfg, &table, palette)
}

/// The first selected column is x for every line; each further column is one line.
pub fn session_from_table(cfg: &SessionConfig, table: &Table, palette: &Palette) -> Result<PlotSession> {
    let mut columns = table.select(&cfg.index)?.into_iter();
    let xs = columns.next().context("no x column selected")?;
    let mut session = PlotSession::new(cfg.title.clone())
        .with_palette(palette.clone())
        .share_coordinates(cfg.share_coordinate);
    for (i, ys) in columns.enumerate() {
        session
            .add_series(xs.clone(), ys)
            .with_context(|| format!("line {i} of '{}'", cfg.title))?;
    }
    Ok(session)
}
