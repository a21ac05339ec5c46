// src/cli/args.rs

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)] // The action name has already been consumed by `Cli`.
pub struct ExecArgs {
    /// Do not echo the quoted command line before running it.
    #[arg(long, short)]
    pub quiet: bool,

    /// Run through the platform shell (`cmd /C` or `/bin/sh -c`).
    #[arg(long, conflicts_with = "no_shell")]
    pub shell: bool,

    /// Never run through the platform shell, even on Windows.
    #[arg(long)]
    pub no_shell: bool,

    /// Set an environment variable for the command ("KEY=VALUE"); repeat for more.
    #[arg(long, action = ArgAction::Append, num_args = 1, value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// The program to run followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl ExecArgs {
    /// `None` leaves the choice to the platform default.
    pub fn shell_choice(&self) -> Option<bool> {
        match (self.shell, self.no_shell) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
