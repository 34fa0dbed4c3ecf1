//! Two small deterministic programs sharing one library.
//!
//! - **[`core`]**: Pure logic (oldest-person selection, binary table
//!   construction). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (config loading, line parsing,
//!   rendering to a writer).
//!
//! The `oldest` and `binary-reps` binaries wire core logic to stdout.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
