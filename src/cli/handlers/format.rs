// src/cli/handlers/format.rs

use crate::cli::handlers::commons::{self, Step, TaskContext};
use anyhow::Result;

/// Check-mode formatters, in the order they run.
pub const STEPS: &[Step] = &[
    Step {
        header: "rustfmt",
        commands: &[
            &["rustfmt", "--check", "examples/dlint/main.rs"],
            &["rustfmt", "--check", "src/lib.rs"],
        ],
    },
    Step {
        header: "deno fmt",
        commands: &[&["deno", "fmt", "--check", "benchmarks/benchmarks.ts"]],
    },
];

/// Main entry point for the 'format' command.
pub fn handle(args: Vec<String>, ctx: &TaskContext<'_>) -> Result<()> {
    commons::expect_no_args("format", &args)?;
    commons::run_steps(ctx, STEPS)
}
