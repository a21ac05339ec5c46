// src/system/env.rs

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

/// A full set of environment variables for a child process.
pub type Environment = HashMap<OsString, OsString>;

/// Snapshot of the current process environment.
pub fn inherited() -> Environment {
    env::vars_os().collect()
}

/// Builds the environment for a child process.
///
/// Starts from `base` (the current process environment when `None`) and applies
/// every entry of `overlay` on top of it. Keys missing from the overlay keep their
/// inherited value. There is no way to delete a variable. `base` is never mutated.
pub fn merge_env(base: Option<&Environment>, overlay: Option<&Environment>) -> Environment {
    let mut merged = match base {
        Some(base) => base.clone(),
        None => inherited(),
    };
    if let Some(overlay) = overlay {
        merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}
