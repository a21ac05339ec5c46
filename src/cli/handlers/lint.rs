// src/cli/handlers/lint.rs

use crate::{
    cli::handlers::commons::{self, Step, TaskContext},
    system::console::AnsiStatus,
};
use anyhow::{Context, Result};

/// Clippy over every target, then the dlint example binary built by that run.
pub const STEPS: &[Step] = &[
    Step {
        header: "clippy",
        commands: &[&[
            "cargo",
            "clippy",
            "--all-targets",
            "--release",
            "--locked",
            "--",
            "-D",
            "clippy::all",
        ]],
    },
    Step {
        header: "deno lint",
        commands: &[&["target/release/examples/dlint", "benchmarks/benchmarks.ts"]],
    },
];

/// Main entry point for the 'lint' command.
pub fn handle(args: Vec<String>, ctx: &TaskContext<'_>) -> Result<()> {
    commons::expect_no_args("lint", &args)?;
    prepare_console(ctx)?;
    commons::run_steps(ctx, STEPS)
}

/// Lets clippy's and dlint's colored diagnostics render. An old console that
/// rejects the mode is fine; any other console failure aborts the run.
fn prepare_console(ctx: &TaskContext<'_>) -> Result<AnsiStatus> {
    let status = ctx
        .console
        .enable_ansi()
        .context("Could not enable ANSI escape sequences on the console")?;
    log::debug!("ANSI console status: {:?}", status);
    Ok(status)
}
