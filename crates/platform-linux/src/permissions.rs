//! Permission detection and guidance for Linux.
//!
//! Camera access on Linux comes down to whether this process can open a
//! `/dev/video*` node, which depends on device permissions and group
//! membership rather than a consent prompt.

use camcheck_permission_core::Capability;

use crate::devices::{enumerate_video_devices, user_in_video_group, VideoDevice};

/// Check all camera-related capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    let devices = enumerate_video_devices();
    vec![
        check_device_nodes(&devices),
        check_device_access(&devices),
        check_video_group(),
    ]
}

/// Check that at least one video capture node exists.
fn check_device_nodes(devices: &[VideoDevice]) -> Capability {
    let available = !devices.is_empty();

    Capability {
        name: "Video Device Nodes".to_string(),
        description: "Video4Linux capture nodes under /dev/video*".to_string(),
        available,
        required: true,
        fix_instructions: if available {
            None
        } else {
            Some(
                "Connect a webcam and verify /dev/video* exists (v4l2-ctl --list-devices)"
                    .to_string(),
            )
        },
    }
}

/// Check read/write access on every node found.
fn check_device_access(devices: &[VideoDevice]) -> Capability {
    let inaccessible: Vec<String> = devices
        .iter()
        .filter(|d| !d.accessible)
        .map(|d| d.path.display().to_string())
        .collect();
    let available = !devices.is_empty() && inaccessible.is_empty();

    Capability {
        name: "Device Access".to_string(),
        description: "Read/write permission on video capture nodes".to_string(),
        available,
        required: true,
        fix_instructions: if inaccessible.is_empty() {
            None
        } else {
            Some(format!(
                "No R/W access to {}. Add your user to the video group: sudo usermod -aG video $USER (logout required)",
                inaccessible.join(", ")
            ))
        },
    }
}

/// Check `video` group membership.
fn check_video_group() -> Capability {
    let in_group = user_in_video_group();

    Capability {
        name: "Video Group Membership".to_string(),
        description: "User membership in the video group".to_string(),
        available: in_group,
        // Some desktops grant device access through logind ACLs instead.
        required: false,
        fix_instructions: if in_group {
            None
        } else {
            Some("sudo usermod -aG video $USER (logout required)".to_string())
        },
    }
}
