//! Developer tooling for the dlint workspace: runs external formatters and
//! linters as child processes and turns the first failure into the exit code of
//! the whole run.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod system;
