//! Permission guidance for Windows.

use camcheck_permission_core::Capability;

/// Check all camera-related capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![camera_access_setting(), desktop_app_access_setting()]
}

fn camera_access_setting() -> Capability {
    Capability {
        name: "Camera Access".to_string(),
        description: "Settings > Privacy & security > Camera > Camera access".to_string(),
        // Not queryable without WinRT; on by default on desktop installs.
        available: true,
        required: true,
        fix_instructions: None,
    }
}

fn desktop_app_access_setting() -> Capability {
    Capability {
        name: "Desktop App Camera Access".to_string(),
        description: "Settings > Privacy & security > Camera > Let desktop apps access your camera"
            .to_string(),
        available: true,
        required: true,
        fix_instructions: None,
    }
}
