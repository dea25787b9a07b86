//! Error handling and exit codes.

use oersted_core::constants::exit_codes;
use oersted_core::OerstedError;

/// Map an application error to the process exit code.
///
/// Configuration problems anywhere in the error chain map to
/// `ERROR_CONFIG`; everything else is `ERROR_GENERIC`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err
        .chain()
        .any(|cause| cause.downcast_ref::<OerstedError>().is_some())
    {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
