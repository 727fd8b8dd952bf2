//! Video4Linux device-node probing.

use std::path::{Path, PathBuf};

/// A video capture device node and its accessibility for this process.
#[derive(Debug, Clone)]
pub struct VideoDevice {
    /// Device node path, e.g. `/dev/video0`.
    pub path: PathBuf,

    /// Whether this process can open the node for read/write.
    pub accessible: bool,
}

/// Enumerate `/dev/video*` capture nodes.
pub fn enumerate_video_devices() -> Vec<VideoDevice> {
    tracing::debug!("Probing /dev for video capture nodes");

    video_device_paths(Path::new("/dev"))
        .into_iter()
        .map(|path| {
            let accessible = device_accessible(&path);
            VideoDevice { path, accessible }
        })
        .collect()
}

/// List `video*` entries under the given device directory, sorted by name.
pub fn video_device_paths(dev_root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dev_root) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("video"))
        })
        .map(|entry| entry.path())
        .collect();

    paths.sort();
    paths
}

/// Check read/write access to a device node with the process's real IDs.
#[cfg(unix)]
pub fn device_accessible(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = std::ffi::CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // access(2) honors the device node's mode and any POSIX ACLs.
    unsafe { libc::access(c_path.as_ptr(), libc::R_OK | libc::W_OK) == 0 }
}

#[cfg(not(unix))]
pub fn device_accessible(_path: &Path) -> bool {
    false
}

/// Whether the current user is in the `video` group.
///
/// Membership is the conventional route to `/dev/video*` access on
/// distributions that do not grant it through logind ACLs.
pub fn user_in_video_group() -> bool {
    let output = std::process::Command::new("groups").output();
    match output {
        Ok(o) => output_lists_group(&String::from_utf8_lossy(&o.stdout), "video"),
        Err(e) => {
            tracing::debug!("Could not run `groups`: {e}");
            false
        }
    }
}

/// Parse `groups` output for an exact group name.
fn output_lists_group(stdout: &str, group: &str) -> bool {
    stdout
        .split_whitespace()
        .any(|candidate| candidate == group)
}
