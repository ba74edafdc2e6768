// File: crates/linechart-window/src/config.rs
// Summary: Session list loaded from a JSON file, with defaults and launch-time validation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;

fn default_share() -> bool { true }
fn default_separator() -> char { ',' }

/// One chart window: which file, which columns, how to title it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SessionConfig {
    pub file: PathBuf,
    /// First entry is the x column, the rest are y columns. Negative means "row number".
    pub index: Vec<i64>,
    pub title: String,
    #[serde(default = "default_share")]
    pub share_coordinate: bool,
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl SessionConfig {
    pub fn line_count(&self) -> usize { self.index.len().saturating_sub(1) }

    /// More y columns than colors: some lines will share a color.
    pub fn reuses_colors(&self, palette_len: usize) -> bool { self.line_count() > palette_len }
}

/// Read and parse the session list. The path must exist and end in `.json`.
pub fn load_config(path: &Path) -> Result<Vec<SessionConfig>> {
    if !path.is_file() {
        bail!("config not found: {}", path.display());
    }
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        bail!("config must be a .json file: {}", path.display());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<Vec<SessionConfig>> {
    let sessions: Vec<SessionConfig> =
        serde_json::from_str(text).context("config must be a list of {file, index, title} objects")?;
    Ok(sessions)
}

/// Reject configs that cannot produce a chart; warn when line colors will repeat.
pub fn validate(sessions: &[SessionConfig], palette_len: usize) -> Result<()> {
    if sessions.is_empty() {
        bail!("config lists no sessions");
    }
    for (i, s) in sessions.iter().enumerate() {
        if s.index.len() < 2 {
            bail!("session {i} ('{}'): index needs at least [x, y1], got {:?}", s.title, s.index);
        }
        if !s.separator.is_ascii() {
            bail!("session {i} ('{}'): separator {:?} is not ASCII", s.title, s.separator);
        }
        if s.reuses_colors(palette_len) {
            warn!(session = i, title = %s.title, lines = s.line_count(), "too many lines, colors will be reused");
        }
    }
    Ok(())
}
