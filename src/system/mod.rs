//! # System Interaction Layer
//!
//! Everything that touches the operating system lives here: building a child
//! environment, quoting arguments for display or for `cmd.exe`, spawning and
//! waiting on processes, and switching the console into ANSI mode.
//!
//! ## Modules
//!
//! - **`env`**: overlays explicit variables on top of an inherited environment.
//! - **`quote`**: POSIX and Windows shell quoting of single arguments.
//! - **`executor`**: the blocking process runner and its `ExecutionError`.
//! - **`console`**: best-effort ANSI enablement behind the `AnsiConsole` trait.

pub mod console;
pub mod env;
pub mod executor;
pub mod quote;

/// The only platform distinction this crate makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }

    /// Whether commands go through the platform shell when the caller did not say.
    /// `cmd.exe` is needed on Windows so `.bat` and `.cmd` files run.
    pub fn default_use_shell(self) -> bool {
        self.is_windows()
    }
}
