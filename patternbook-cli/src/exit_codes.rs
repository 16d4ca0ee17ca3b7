//! Exit code constants shared by all CLI commands
//!
//! - 0: success
//! - 1: general errors and warnings
//! - 2: validation failures

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// General error or warnings found
pub const EXIT_WARNING: i32 = 1;

/// Validation errors or critical failures
pub const EXIT_ERROR: i32 = 2;
