//! Utility modules: build info, log setup, data directory.

pub mod build_info;
pub mod logging;
pub mod persistence;

pub use build_info::*;
