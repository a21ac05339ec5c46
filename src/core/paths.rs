// src/core/paths.rs

use crate::constants::PROJECT_MANIFEST_FILENAME;
use crate::system::Platform;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("No '{manifest}' found in '{start}' or any of its parent directories.")]
    ProjectRootNotFound { manifest: &'static str, start: String },
    #[error("Project root '{path}' is not accessible: {source}")]
    ProjectRootInvalid {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lexically normalizes the program path of a command for `platform`.
///
/// Repeated separators and `.` components collapse and `..` removes the component
/// before it. On Windows both `/` and `\` separate components and the result is
/// written with `\`. A bare program name (no separator) is returned as-is so it
/// is still looked up on `PATH`.
pub fn normalize_program(program: &str, platform: Platform) -> String {
    let windows = platform.is_windows();
    let is_sep = |c: char| c == '/' || (windows && c == '\\');
    if !program.contains(is_sep) {
        return program.to_string();
    }
    let sep = if windows { "\\" } else { "/" };

    // `C:` style drive prefix.
    let (drive, rest) = match program.get(..2) {
        Some(head) if windows && head.ends_with(':') && head.starts_with(|c: char| c.is_ascii_alphabetic()) => {
            (head, program.get(2..).unwrap_or_default())
        }
        _ => ("", program),
    };

    let leading = rest.chars().take_while(|&c| is_sep(c)).count();
    let root = match leading {
        0 => "",
        // UNC `\\server\share` keeps its double separator.
        2 if windows => "\\\\",
        _ => sep,
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split(is_sep) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if !root.is_empty() => {}
                _ => parts.push(".."),
            },
            normal => parts.push(normal),
        }
    }

    let normalized = format!("{}{}{}", drive, root, parts.join(sep));
    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Walks up from `start` to the nearest directory holding the project manifest.
pub fn find_project_root(start: &Path) -> Result<PathBuf, PathError> {
    let found = start
        .ancestors()
        .find(|dir| dir.join(PROJECT_MANIFEST_FILENAME).is_file())
        .ok_or_else(|| PathError::ProjectRootNotFound {
            manifest: PROJECT_MANIFEST_FILENAME,
            start: start.display().to_string(),
        })?;
    canonical_root(found)
}

/// Canonicalizes a project root without producing `\\?\` verbatim paths on Windows.
pub fn canonical_root(path: &Path) -> Result<PathBuf, PathError> {
    dunce::canonicalize(path).map_err(|e| PathError::ProjectRootInvalid {
        path: path.display().to_string(),
        source: e,
    })
}
