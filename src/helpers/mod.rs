//! Helpers - Small Cross-Cutting Utilities

mod fs;

pub use fs::*;
