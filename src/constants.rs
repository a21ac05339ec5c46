// src/constants.rs

/// Any non-empty value disables colored status output.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Overrides project root discovery.
pub const PROJECT_ROOT_ENV: &str = "DEVTASK_ROOT";

/// The file that marks a project root when walking up from the current directory.
pub const PROJECT_MANIFEST_FILENAME: &str = "Cargo.toml";
