// src/cli/handlers/commons.rs

// Shared plumbing for the actions: the context they receive and the
// fail-fast step runner.

use crate::{
    config::Settings,
    core::color::Palette,
    system::{
        console::AnsiConsole,
        executor::{self, RunOptions},
    },
};
use anyhow::{Result, anyhow};

/// What every action handler is given by the dispatcher.
#[derive(Debug)]
pub struct TaskContext<'a> {
    pub settings: &'a Settings,
    pub palette: Palette,
    pub console: &'a dyn AnsiConsole,
}

impl<'a> TaskContext<'a> {
    pub fn new(settings: &'a Settings, console: &'a dyn AnsiConsole) -> Self {
        Self {
            settings,
            palette: settings.palette(),
            console,
        }
    }
}

/// A named group of commands, run in order.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub header: &'static str,
    pub commands: &'static [&'static [&'static str]],
}

/// Runs every command of every step from the project root, quietly and without
/// a shell. The first failure is returned untouched so its exit code survives.
pub fn run_steps(ctx: &TaskContext<'_>, steps: &[Step]) -> Result<()> {
    let options = RunOptions::quiet()
        .in_dir(&ctx.settings.root)
        .with_shell(false);
    for step in steps {
        println!("{}", ctx.palette.header(step.header));
        for &command in step.commands {
            log::debug!("[{}] running {:?}", step.header, command);
            executor::run(command, &options)?;
        }
    }
    Ok(())
}

/// The orchestration actions take no arguments.
pub fn expect_no_args(action: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "'{}' takes no arguments, got: {}",
            action,
            args.join(" ")
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::system::console::{AnsiStatus, ConsoleError};
    use crate::system::executor::ExecutionError;
    use std::cell::Cell;
    use std::path::Path;

    /// Console double that records whether it was asked and replays a fixed answer.
    #[derive(Debug)]
    pub(crate) struct FakeConsole {
        pub answer: fn() -> Result<AnsiStatus, ConsoleError>,
        pub calls: Cell<u32>,
    }

    impl FakeConsole {
        pub(crate) fn new(answer: fn() -> Result<AnsiStatus, ConsoleError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl AnsiConsole for FakeConsole {
        fn enable_ansi(&self) -> Result<AnsiStatus, ConsoleError> {
            self.calls.set(self.calls.get() + 1);
            (self.answer)()
        }
    }

    pub(crate) fn settings_for(root: &Path) -> Settings {
        Settings {
            color: false,
            root: root.to_path_buf(),
        }
    }

    #[test]
    fn test_expect_no_args() {
        assert!(expect_no_args("format", &[]).is_ok());
        let err = expect_no_args("lint", &["--fix".to_string()]).unwrap_err();
        assert!(err.to_string().contains("'lint' takes no arguments"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_steps_stops_at_first_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = settings_for(dir.path());
        let console = FakeConsole::new(|| Ok(AnsiStatus::Enabled));
        let ctx = TaskContext::new(&settings, &console);

        let steps = [
            Step {
                header: "first",
                commands: &[&["sh", "-c", "touch first"], &["sh", "-c", "exit 5"]],
            },
            Step {
                header: "second",
                commands: &[&["sh", "-c", "touch second"]],
            },
        ];

        let err = run_steps(&ctx, &steps).unwrap_err();

        let exec_err = err.downcast_ref::<ExecutionError>().unwrap();
        assert_eq!(exec_err.exit_code(), 5);
        assert!(dir.path().join("first").exists());
        assert!(!dir.path().join("second").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_steps_runs_everything_in_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = settings_for(dir.path());
        let console = FakeConsole::new(|| Ok(AnsiStatus::Enabled));
        let ctx = TaskContext::new(&settings, &console);

        let steps = [Step {
            header: "only",
            commands: &[&["sh", "-c", "touch a"], &["sh", "-c", "touch b"]],
        }];

        run_steps(&ctx, &steps).unwrap();
        assert!(dir.path().join("a").exists());
        assert!(dir.path().join("b").exists());
    }
}
