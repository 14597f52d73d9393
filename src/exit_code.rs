//!
//! The process exit codes.
//!

/// The success exit code.
pub const SUCCESS: i32 = 0;

/// The failure exit code.
pub const FAILURE: i32 = 1;
