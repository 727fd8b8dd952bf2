//! CamCheck macOS Platform Integration
//!
//! Platform-specific implementations for macOS:
//! - **Authorization:** AVFoundation camera consent query and request
//! - **Permissions:** Capability report with System Settings guidance
//!
//! The AVFoundation calls are only compiled for macOS targets; other
//! targets get fallbacks that report the operation as unsupported, so
//! dependent crates stay compile-safe everywhere.

use camcheck_common::error::CamcheckResult;
use camcheck_permission_core::AuthorizationStatus;

#[cfg(target_os = "macos")]
mod avfoundation;
pub mod permissions;

/// Terminal command that clears a recorded camera consent decision.
pub const TCC_RESET_HINT: &str = "tccutil reset Camera";

/// System Settings deep link for the camera privacy pane.
pub const CAMERA_PRIVACY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Camera";

/// Query the current camera authorization status for this process.
#[cfg(target_os = "macos")]
pub fn authorization_status() -> CamcheckResult<AuthorizationStatus> {
    Ok(AuthorizationStatus::from_raw(
        avfoundation::authorization_status_raw(),
    ))
}

/// Query the current camera authorization status for this process.
#[cfg(not(target_os = "macos"))]
pub fn authorization_status() -> CamcheckResult<AuthorizationStatus> {
    Err(camcheck_common::error::CamcheckError::unsupported(
        "camera authorization status can only be queried on macOS",
    ))
}

/// Ask the OS to prompt the user for camera access.
///
/// The permission subsystem invokes `on_complete` exactly once, on an
/// OS-managed background thread, with the granted/denied outcome.
#[cfg(target_os = "macos")]
pub fn request_access(on_complete: Box<dyn FnOnce(bool) + Send + 'static>) -> CamcheckResult<()> {
    avfoundation::request_access(on_complete);
    Ok(())
}

/// Ask the OS to prompt the user for camera access.
#[cfg(not(target_os = "macos"))]
pub fn request_access(_on_complete: Box<dyn FnOnce(bool) + Send + 'static>) -> CamcheckResult<()> {
    Err(camcheck_common::error::CamcheckError::unsupported(
        "camera access requests can only be issued on macOS",
    ))
}
