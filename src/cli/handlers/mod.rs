// src/cli/handlers/mod.rs

// One module per action; `commons` holds the step runner they share.

pub mod commons;
pub mod exec;
pub mod format;
pub mod lint;
