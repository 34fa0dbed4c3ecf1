//! I/O helpers for the binaries.

pub mod config;
pub mod read_number;
pub mod render;
