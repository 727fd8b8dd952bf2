use camcheck_common::error::{CamcheckError, CamcheckResult};
use camcheck_permission_core::AuthorizationStatus;

use crate::authority::{AccessCallback, CameraAuthority};

/// Windows camera authority.
///
/// Desktop apps are governed by the global camera toggles in Settings;
/// there is no per-process prompt to trigger from a console tool.
pub struct WindowsAuthority;

impl WindowsAuthority {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraAuthority for WindowsAuthority {
    fn authorization_status(&self) -> CamcheckResult<AuthorizationStatus> {
        Err(CamcheckError::unsupported(
            "Windows camera access is governed by Settings > Privacy & security > Camera. Run `camcheck check`.",
        ))
    }

    fn request_access(&self, _on_complete: AccessCallback) -> CamcheckResult<()> {
        Err(CamcheckError::unsupported(
            "Windows has no camera consent prompt to trigger from a console tool. Run `camcheck check`.",
        ))
    }
}
