//! Command shell over a loaded [`ReportSession`](crate::core::ReportSession).

pub mod chart;
pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod table;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::{run_cli, SCRIPT_MODE_ENV};
