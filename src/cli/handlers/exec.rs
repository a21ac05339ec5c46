// src/cli/handlers/exec.rs

use crate::{
    cli::{args::ExecArgs, handlers::commons::TaskContext},
    system::{
        env::Environment,
        executor::{self, RunOptions},
    },
};
use anyhow::{Result, anyhow};
use clap::Parser;
use std::ffi::OsString;

/// Main entry point for the 'exec' command: one ad-hoc command, run from the
/// project root with the same echo, environment and exit-code rules as the steps.
pub fn handle(args: Vec<String>, ctx: &TaskContext<'_>) -> Result<()> {
    let exec_args = ExecArgs::try_parse_from(args)?;

    let options = RunOptions {
        quiet: exec_args.quiet,
        cwd: Some(ctx.settings.root.clone()),
        env: None,
        merge_env: Some(parse_env_pairs(&exec_args.env)?),
        shell: exec_args.shell_choice(),
    };
    executor::run(&exec_args.command, &options)?;
    Ok(())
}

/// Parses `KEY=VALUE` pairs into an overlay. Later pairs win.
fn parse_env_pairs(pairs: &[String]) -> Result<Environment> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                Ok((OsString::from(key), OsString::from(value)))
            }
            _ => Err(anyhow!(
                "Invalid environment variable '{}': expected KEY=VALUE",
                pair
            )),
        })
        .collect()
}
