// File: crates/linechart-window/src/lib.rs
// Summary: Launcher library: session config, CSV source, process launcher and window presentation.

pub mod config;
pub mod launcher;
pub mod session;
pub mod source;
pub mod window;

pub use config::{load_config, validate, SessionConfig};
pub use launcher::launch_all;
pub use session::{build_session, session_from_table};
pub use source::{load_table, Table};
