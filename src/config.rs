// src/config.rs

use crate::constants::{NO_COLOR_ENV, PROJECT_ROOT_ENV};
use crate::core::color::Palette;
use crate::core::paths::{self, PathError};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Everything the actions need to know about their surroundings, resolved once
/// in `main` and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether status markers carry ANSI colors.
    pub color: bool,
    /// Working directory for every step; relative step paths resolve against it.
    pub root: PathBuf,
}

impl Settings {
    /// Resolves settings from the real process environment and current directory.
    pub fn load(color: bool, root_flag: Option<&Path>) -> Result<Self, PathError> {
        let cwd = env::current_dir().map_err(|e| PathError::ProjectRootInvalid {
            path: ".".to_string(),
            source: e,
        })?;
        Self::from_sources(color, root_flag, env::var_os(PROJECT_ROOT_ENV), &cwd)
    }

    /// The project root comes from `--root`, then `DEVTASK_ROOT`, then the nearest
    /// ancestor of `cwd` holding a `Cargo.toml`.
    pub fn from_sources(
        color: bool,
        root_flag: Option<&Path>,
        root_env: Option<OsString>,
        cwd: &Path,
    ) -> Result<Self, PathError> {
        let root = match (root_flag, root_env.filter(|v| !v.is_empty())) {
            (Some(flag), _) => paths::canonical_root(&cwd.join(flag))?,
            (None, Some(var)) => paths::canonical_root(&cwd.join(var))?,
            (None, None) => paths::find_project_root(cwd)?,
        };
        log::debug!("Resolved project root: {}", root.display());
        Ok(Self { color, root })
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.color)
    }
}

/// Colors are on unless `--no-color` was passed or `NO_COLOR` holds a non-empty value.
pub fn color_enabled(no_color_flag: bool, no_color_var: Option<&OsStr>) -> bool {
    !no_color_flag && no_color_var.is_none_or(OsStr::is_empty)
}

/// [`color_enabled`] against the real `NO_COLOR` variable.
pub fn color_from_env(no_color_flag: bool) -> bool {
    color_enabled(no_color_flag, env::var_os(NO_COLOR_ENV).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROJECT_MANIFEST_FILENAME;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_MANIFEST_FILENAME), "[package]\n").unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        dir
    }

    #[test]
    fn test_no_color_rules() {
        assert!(color_enabled(false, None));
        assert!(color_enabled(false, Some(OsStr::new(""))));
        assert!(!color_enabled(false, Some(OsStr::new("1"))));
        assert!(!color_enabled(false, Some(OsStr::new("false"))));
        assert!(!color_enabled(true, None));
    }

    #[test]
    fn test_root_discovered_from_cwd() {
        let dir = project();
        let settings = Settings::from_sources(true, None, None, &dir.path().join("src")).unwrap();
        assert_eq!(settings.root, dunce::canonicalize(dir.path()).unwrap());
        assert!(settings.palette().enabled());
    }

    #[test]
    fn test_flag_beats_env_beats_discovery() {
        let flagged = project();
        let from_env = project();
        let cwd = project();

        let settings = Settings::from_sources(
            false,
            Some(flagged.path()),
            Some(from_env.path().as_os_str().to_owned()),
            cwd.path(),
        )
        .unwrap();
        assert_eq!(settings.root, dunce::canonicalize(flagged.path()).unwrap());

        let settings = Settings::from_sources(
            false,
            None,
            Some(from_env.path().as_os_str().to_owned()),
            cwd.path(),
        )
        .unwrap();
        assert_eq!(settings.root, dunce::canonicalize(from_env.path()).unwrap());
    }

    #[test]
    fn test_relative_flag_resolves_against_cwd() {
        let dir = project();
        let settings = Settings::from_sources(false, Some(Path::new("src")), None, dir.path()).unwrap();
        assert_eq!(settings.root, dunce::canonicalize(dir.path().join("src")).unwrap());
    }

    #[test]
    fn test_missing_explicit_root_is_an_error() {
        let dir = project();
        let err = Settings::from_sources(false, Some(Path::new("nope")), None, dir.path()).unwrap_err();
        assert!(matches!(err, PathError::ProjectRootInvalid { .. }));
    }
}
