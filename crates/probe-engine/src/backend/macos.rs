use camcheck_common::error::CamcheckResult;
use camcheck_permission_core::AuthorizationStatus;
use camcheck_platform_macos as platform_macos;

use crate::authority::{AccessCallback, CameraAuthority};

/// AVFoundation-backed camera authority.
///
/// Only functional on macOS targets; elsewhere the platform crate
/// reports the operations as unsupported.
pub struct MacOSAuthority;

impl MacOSAuthority {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacOSAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraAuthority for MacOSAuthority {
    fn authorization_status(&self) -> CamcheckResult<AuthorizationStatus> {
        platform_macos::authorization_status()
    }

    fn request_access(&self, on_complete: AccessCallback) -> CamcheckResult<()> {
        platform_macos::request_access(on_complete)
    }
}
