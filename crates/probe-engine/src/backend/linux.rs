use camcheck_common::error::{CamcheckError, CamcheckResult};
use camcheck_permission_core::AuthorizationStatus;

use crate::authority::{AccessCallback, CameraAuthority};

/// Linux camera authority.
///
/// Linux has no per-application consent broker to query or prompt;
/// camera access follows `/dev/video*` node permissions, which the
/// capability check reports on.
pub struct LinuxAuthority;

impl LinuxAuthority {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinuxAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraAuthority for LinuxAuthority {
    fn authorization_status(&self) -> CamcheckResult<AuthorizationStatus> {
        Err(CamcheckError::unsupported(
            "Linux has no camera consent broker; access follows /dev/video* permissions. Run `camcheck check`.",
        ))
    }

    fn request_access(&self, _on_complete: AccessCallback) -> CamcheckResult<()> {
        Err(CamcheckError::unsupported(
            "Linux has no camera consent prompt to trigger. Run `camcheck check`.",
        ))
    }
}
