// src/system/executor.rs

use crate::core::paths;
use crate::system::{
    Platform,
    env::{self, Environment},
    quote,
};
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command '{command}' could not be executed: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command '{command}' exited with code {code}.")]
    NonZeroExit { command: String, code: i32 },
    #[error("Command '{command}' was terminated without an exit code ({status}).")]
    Terminated { command: String, status: ExitStatus },
}

impl ExecutionError {
    /// The status the top-level process should exit with for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NonZeroExit { code, .. } => *code,
            #[cfg(unix)]
            Self::Terminated { status, .. } => {
                use std::os::unix::process::ExitStatusExt;
                status.signal().map_or(1, |signal| 128 + signal)
            }
            _ => 1,
        }
    }
}

/// Per-invocation knobs. The defaults echo the command, inherit the working
/// directory and environment, and let the platform decide about the shell.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Suppress the echo of the quoted command line.
    pub quiet: bool,
    /// Working directory for the child; the caller's when `None`.
    pub cwd: Option<PathBuf>,
    /// Base environment; the current process environment when `None`.
    pub env: Option<Environment>,
    /// Variables applied on top of the base environment.
    pub merge_env: Option<Environment>,
    /// Route through the platform shell; see [`Platform::default_use_shell`] when `None`.
    pub shell: Option<bool>,
}

impl RunOptions {
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_shell(mut self, shell: bool) -> Self {
        self.shell = Some(shell);
        self
    }

    pub fn with_merge_env(mut self, overlay: Environment) -> Self {
        self.merge_env = Some(overlay);
        self
    }
}

/// Runs `args` to completion and fails unless it exits with code 0.
///
/// `args[0]` is the program; its path is normalized for the host before the
/// spawn. Unless `options.quiet`, the quoted command line is printed to stdout
/// first. The call blocks for the child's whole lifetime: there is no timeout.
pub fn run<S: AsRef<str>>(args: &[S], options: &RunOptions) -> Result<(), ExecutionError> {
    let platform = Platform::current();
    let Some((program, rest)) = args.split_first() else {
        return Err(ExecutionError::EmptyCommand);
    };

    let mut argv: Vec<String> = Vec::with_capacity(args.len());
    argv.push(paths::normalize_program(program.as_ref(), platform));
    argv.extend(rest.iter().map(|arg| arg.as_ref().to_string()));

    let use_shell = options
        .shell
        .unwrap_or_else(|| platform.default_use_shell());
    let command_line = quote::join_command(&argv, platform);

    if !options.quiet {
        println!("{}", command_line);
    }

    let child_env = env::merge_env(options.env.as_ref(), options.merge_env.as_ref());

    let mut command = build_command(&argv, &command_line, use_shell, options.cwd.as_deref());
    command
        .env_clear()
        .envs(&child_env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(cwd) = &options.cwd {
        command.current_dir(dunce::simplified(cwd));
    }

    log::debug!(
        "Spawning '{}' (shell: {}, cwd: {:?}, {} env vars)",
        command_line,
        use_shell,
        options.cwd.as_deref().map(Path::display),
        child_env.len()
    );

    let status = command.status().map_err(|e| ExecutionError::Spawn {
        command: command_line.clone(),
        source: e,
    })?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(ExecutionError::NonZeroExit {
            command: command_line,
            code,
        }),
        None => Err(ExecutionError::Terminated {
            command: command_line,
            status,
        }),
    }
}

#[cfg(windows)]
fn build_command(
    argv: &[String],
    command_line: &str,
    use_shell: bool,
    cwd: Option<&Path>,
) -> StdCommand {
    use std::os::windows::process::CommandExt;

    if use_shell {
        let mut command = StdCommand::new("cmd");
        // Already quoted for cmd.exe; passing it through `arg` would quote it again.
        command.arg("/C").raw_arg(command_line);
        return command;
    }
    plain_command(argv, cwd)
}

#[cfg(not(windows))]
fn build_command(
    argv: &[String],
    command_line: &str,
    use_shell: bool,
    cwd: Option<&Path>,
) -> StdCommand {
    if use_shell {
        let mut command = StdCommand::new("/bin/sh");
        command.arg("-c").arg(command_line);
        return command;
    }
    plain_command(argv, cwd)
}

fn plain_command(argv: &[String], cwd: Option<&Path>) -> StdCommand {
    let program = argv.first().map_or("", String::as_str);
    let mut command = StdCommand::new(resolve_program(program, cwd));
    command.args(argv.iter().skip(1));
    command
}

/// A relative program path with a directory part is looked up from the child's
/// working directory, not the caller's. Bare names still go through `PATH`.
fn resolve_program(program: &str, cwd: Option<&Path>) -> PathBuf {
    let path = Path::new(program);
    match cwd {
        Some(cwd) if path.is_relative() && path.components().count() > 1 => cwd.join(path),
        _ => path.to_path_buf(),
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::TempDir;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string()]
    }

    #[test]
    fn test_success_returns_ok() {
        assert!(run(&["true"], &RunOptions::quiet()).is_ok());
    }

    #[test]
    fn test_false_reports_exit_code_one() {
        let err = run(&["false"], &RunOptions::quiet()).unwrap_err();
        assert!(matches!(err, ExecutionError::NonZeroExit { code: 1, .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_is_propagated_verbatim() {
        let err = run(&sh("exit 42"), &RunOptions::quiet()).unwrap_err();
        assert_eq!(err.exit_code(), 42);
        assert!(err.to_string().contains("exit 42"));
    }

    #[test]
    fn test_signal_maps_to_128_plus_signal() {
        let err = run(&sh("kill -9 $$"), &RunOptions::quiet()).unwrap_err();
        assert!(matches!(err, ExecutionError::Terminated { .. }));
        assert_eq!(err.exit_code(), 128 + 9);
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let empty: [&str; 0] = [];
        let err = run(&empty, &RunOptions::quiet()).unwrap_err();
        assert!(matches!(err, ExecutionError::EmptyCommand));
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let err = run(&["devtask-no-such-program-xyz"], &RunOptions::quiet()).unwrap_err();
        assert!(matches!(err, ExecutionError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_overlay_reaches_child() {
        let overlay = Environment::from([(
            OsString::from("DEVTASK_PROBE"),
            OsString::from("from overlay"),
        )]);
        let options = RunOptions::quiet().with_merge_env(overlay);
        assert!(run(&sh(r#"test "$DEVTASK_PROBE" = "from overlay""#), &options).is_ok());
    }

    #[test]
    fn test_explicit_base_replaces_inherited_environment() {
        let base = Environment::from([
            (OsString::from("PATH"), OsString::from("/usr/bin:/bin")),
            (OsString::from("ONLY_IN_BASE"), OsString::from("1")),
        ]);
        let options = RunOptions {
            quiet: true,
            env: Some(base),
            ..RunOptions::default()
        };
        assert!(run(&sh(r#"test "$ONLY_IN_BASE" = 1 && test -z "$HOME""#), &options).is_ok());
    }

    #[test]
    fn test_runs_in_requested_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("marker.txt"), "x").unwrap();
        let options = RunOptions::quiet().in_dir(dir.path());
        assert!(run(&sh("test -f marker.txt"), &options).is_ok());
    }

    #[test]
    fn test_program_path_is_normalized() {
        assert!(run(&["/bin/./true"], &RunOptions::quiet()).is_ok());
    }

    #[test]
    fn test_explicit_shell_interprets_metacharacters() {
        let dir = TempDir::new().unwrap();
        let options = RunOptions::quiet().in_dir(dir.path()).with_shell(true);
        // Quoting keeps the `>` literal, so the shell sees a single echo argument.
        assert!(run(&["echo", "a > b"], &options).is_ok());
        assert!(!dir.path().join("b").exists());
    }
}
