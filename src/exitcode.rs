//! Process exit codes
//!
//! Dispatched tasks only ever exit with `OK` or `FAILURE`. The remaining codes
//! follow BSD sysexits.h and are used by the auxiliary commands.

/// Successful termination
pub const OK: i32 = 0;

/// Task failed or could not start
pub const FAILURE: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
