// File: crates/linechart-window/src/launcher.rs
// Summary: One child process per session; waits for all and reports the ones that failed.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Child, Command};

use anyhow::{bail, Context, Result};
use tracing::{error, info};

/// Spawn `program <config> --session <i>` for every session, then wait for all of them.
/// A failing child does not stop its siblings.
pub fn launch_all(program: impl AsRef<OsStr>, config: &Path, sessions: usize) -> Result<()> {
    let program = program.as_ref();
    let mut children: Vec<(usize, Child)> = Vec::with_capacity(sessions);
    let mut failed = Vec::new();

    for i in 0..sessions {
        let spawned = Command::new(program)
            .arg(config)
            .arg("--session")
            .arg(i.to_string())
            .spawn()
            .with_context(|| format!("spawning session {i}"));
        match spawned {
            Ok(child) => {
                info!(session = i, pid = child.id(), "session started");
                children.push((i, child));
            }
            Err(e) => {
                error!(session = i, "{e:#}");
                failed.push(i);
            }
        }
    }

    for (i, mut child) in children {
        match child.wait() {
            Ok(status) if status.success() => info!(session = i, "session finished"),
            Ok(status) => {
                error!(session = i, %status, "session failed");
                failed.push(i);
            }
            Err(e) => {
                error!(session = i, "waiting for session: {e}");
                failed.push(i);
            }
        }
    }

    if !failed.is_empty() {
        failed.sort_unstable();
        bail!("{} of {sessions} sessions failed: {failed:?}", failed.len());
    }
    Ok(())
}
