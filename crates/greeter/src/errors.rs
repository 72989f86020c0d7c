//! Exit status for greeter
//!
//! sysexits(3)-style codes for the failure modes the sequence can hit.

use greeter_common::GreeterError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a host facility fails (buffer allocation, gethostname)
pub const EXIT_OS_ERROR: i32 = 71;

/// Exit code when the config file is missing or invalid
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Map a failed run to its exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GreeterError>() {
        Some(e) if e.is_os_failure() => EXIT_OS_ERROR,
        Some(e) if e.is_config_failure() => EXIT_CONFIG_ERROR,
        _ => EXIT_GENERAL_ERROR,
    }
}
