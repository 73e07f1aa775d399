//! Core types: errors, configuration, score-file paths.

pub mod config;
pub mod errors;
pub mod paths;
