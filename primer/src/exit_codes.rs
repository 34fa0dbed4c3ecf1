//! Stable exit codes for the `oldest` and `binary-reps` binaries.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments/config or an output error.
pub const INVALID: i32 = 1;
/// `oldest` was given an empty roster, so there is no one to select.
pub const EMPTY: i32 = 2;
