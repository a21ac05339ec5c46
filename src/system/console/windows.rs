// src/system/console/windows.rs
#![allow(unsafe_code)]

use super::{AnsiStatus, ConsoleError};
use std::io;
use std::iter;
use windows_sys::Win32::Foundation::{
    CloseHandle, ERROR_INVALID_PARAMETER, GENERIC_READ, GENERIC_WRITE, HANDLE,
    INVALID_HANDLE_VALUE,
};
use windows_sys::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_READ, FILE_SHARE_WRITE, OPEN_EXISTING,
};
use windows_sys::Win32::System::Console::{
    CONSOLE_MODE, ENABLE_VIRTUAL_TERMINAL_PROCESSING, GetConsoleMode, SetConsoleMode,
};

fn last_error(call: &'static str) -> ConsoleError {
    ConsoleError::Api {
        call,
        source: io::Error::last_os_error(),
    }
}

/// Opens `CONOUT$` and ORs `ENABLE_VIRTUAL_TERMINAL_PROCESSING` into its mode.
///
/// `ERROR_INVALID_PARAMETER` from `SetConsoleMode` means the flag is unknown to
/// this Windows version and yields `Unsupported`. The device handle is closed on
/// every path, including errors.
pub(super) fn enable_virtual_terminal() -> Result<AnsiStatus, ConsoleError> {
    let device: Vec<u16> = "CONOUT$".encode_utf16().chain(iter::once(0)).collect();

    // SAFETY: `device` is a NUL-terminated UTF-16 string that outlives the call;
    // null security attributes and a zero template handle are documented defaults.
    let raw: HANDLE = unsafe {
        CreateFileW(
            device.as_ptr(),
            GENERIC_READ | GENERIC_WRITE,
            FILE_SHARE_READ | FILE_SHARE_WRITE,
            std::ptr::null(),
            OPEN_EXISTING,
            0,
            0,
        )
    };
    if raw == INVALID_HANDLE_VALUE {
        return Err(last_error("CreateFileW"));
    }

    let conout = scopeguard::guard(raw, |handle| {
        // SAFETY: `handle` came from a successful CreateFileW and is closed exactly once.
        if unsafe { CloseHandle(handle) } == 0 {
            log::warn!(
                "Failed to close console handle: {}",
                io::Error::last_os_error()
            );
        }
    });

    let mut mode: CONSOLE_MODE = 0;
    // SAFETY: `conout` is a live console handle and `mode` is a valid out-pointer.
    if unsafe { GetConsoleMode(*conout, &mut mode) } == 0 {
        return Err(last_error("GetConsoleMode"));
    }
    log::debug!("Console output mode before update: {:#x}", mode);

    // SAFETY: `conout` is a live console handle.
    if unsafe { SetConsoleMode(*conout, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) } == 0 {
        let source = io::Error::last_os_error();
        if source.raw_os_error() == Some(ERROR_INVALID_PARAMETER as i32) {
            log::warn!("Console rejected virtual terminal processing; colors stay off.");
            return Ok(AnsiStatus::Unsupported);
        }
        return Err(ConsoleError::Api {
            call: "SetConsoleMode",
            source,
        });
    }

    Ok(AnsiStatus::Enabled)
}
