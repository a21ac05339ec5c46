// src/system/console/mod.rs

//! Best-effort switch of the console into ANSI escape-sequence mode.
//!
//! Terminals outside Windows interpret escape sequences already, so the native
//! implementation there is a no-op. On Windows the console output device has to
//! opt in through `ENABLE_VIRTUAL_TERMINAL_PROCESSING`; see `windows.rs`.

#[cfg(windows)]
mod windows;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console call {call} failed: {source}")]
    Api {
        call: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of asking the console to interpret ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiStatus {
    Enabled,
    /// The console rejected the mode flag, typically a Windows release older than 10.
    Unsupported,
}

impl AnsiStatus {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Something that can be asked to turn on ANSI escape-sequence interpretation.
pub trait AnsiConsole: std::fmt::Debug {
    fn enable_ansi(&self) -> Result<AnsiStatus, ConsoleError>;
}

/// The console attached to this process.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeConsole;

#[cfg(windows)]
impl AnsiConsole for NativeConsole {
    fn enable_ansi(&self) -> Result<AnsiStatus, ConsoleError> {
        windows::enable_virtual_terminal()
    }
}

#[cfg(not(windows))]
impl AnsiConsole for NativeConsole {
    fn enable_ansi(&self) -> Result<AnsiStatus, ConsoleError> {
        Ok(AnsiStatus::Enabled)
    }
}
