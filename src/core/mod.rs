// src/core/mod.rs

pub mod color;
pub mod paths;
