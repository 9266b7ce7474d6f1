//! Terminal line-sum puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_linesum::{core,input,term,types}`
//! and hosts the binary-side [`config`] and [`logging`] modules.

pub mod config;
pub mod logging;

pub use tui_linesum_core as core;
pub use tui_linesum_input as input;
pub use tui_linesum_term as term;
pub use tui_linesum_types as types;
