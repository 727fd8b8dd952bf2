//! Permission detection and guidance for macOS.

use camcheck_permission_core::{AuthorizationStatus, Capability};

use crate::{CAMERA_PRIVACY_SETTINGS_URL, TCC_RESET_HINT};

/// Check all camera-related capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![camera_authorization_capability()]
}

fn camera_authorization_capability() -> Capability {
    match crate::authorization_status() {
        Ok(status) => capability_for_status(status),
        Err(e) => {
            tracing::debug!("Camera authorization query unavailable: {e}");
            Capability {
                name: "Camera Authorization".to_string(),
                description: "AVFoundation camera consent for this process".to_string(),
                available: false,
                required: true,
                fix_instructions: Some(
                    "Camera authorization can only be queried on macOS".to_string(),
                ),
            }
        }
    }
}

fn capability_for_status(status: AuthorizationStatus) -> Capability {
    let fix_instructions = match status {
        AuthorizationStatus::Authorized => None,
        AuthorizationStatus::Denied => Some(format!(
            "Reset the decision with `{TCC_RESET_HINT}`, or enable this app under System Settings > Privacy & Security > Camera (open {CAMERA_PRIVACY_SETTINGS_URL})"
        )),
        AuthorizationStatus::Restricted => Some(
            "Camera use is restricted by device policy (parental controls or a management profile)"
                .to_string(),
        ),
        AuthorizationStatus::NotDetermined => {
            Some("Run `camcheck request` to trigger the consent prompt".to_string())
        }
        AuthorizationStatus::Unknown(raw) => Some(format!(
            "Unrecognized authorization status {raw}; check System Settings > Privacy & Security > Camera"
        )),
    };

    Capability {
        name: "Camera Authorization".to_string(),
        description: "AVFoundation camera consent for this process".to_string(),
        available: status.is_authorized(),
        required: true,
        fix_instructions,
    }
}
