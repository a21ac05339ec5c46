// src/cli/mod.rs

use clap::Parser;
use std::path::PathBuf;

pub mod args;
pub mod handlers;

/// devtask: format and lint gate for the dlint workspace.
///
/// Each action runs a fixed sequence of external tools from the project root,
/// stops at the first failing one, and exits with that tool's exit code.
///
/// Actions:
/// - `format` (`fmt`): rustfmt and deno fmt in check mode.
/// - `lint`: cargo clippy, then the dlint example binary over the benchmarks.
/// - `exec -- <PROGRAM> [ARGS]...`: run a single command the same way.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true, arg_required_else_help = true)]
pub struct Cli {
    /// Project root. Defaults to `DEVTASK_ROOT`, then the nearest directory with a `Cargo.toml`.
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Print status markers without ANSI colors (same as setting `NO_COLOR`).
    #[arg(long)]
    pub no_color: bool,

    /// The action to perform.
    pub action: String,

    /// Arguments for the action. Only `exec` takes any.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
