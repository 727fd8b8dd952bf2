use camcheck_permission_core::Capability;

pub mod linux;
pub mod macos;
pub mod windows;

pub use linux::LinuxAuthority;
pub use macos::MacOSAuthority;
pub use windows::WindowsAuthority;

use crate::authority::CameraAuthority;

/// Get the platform-specific camera authority.
pub fn default_authority() -> Box<dyn CameraAuthority> {
    #[cfg(target_os = "macos")]
    {
        Box::new(MacOSAuthority::new())
    }
    #[cfg(target_os = "linux")]
    {
        Box::new(LinuxAuthority::new())
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsAuthority::new())
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        // Treat unrecognized unixes like Linux: no consent broker.
        Box::new(LinuxAuthority::new())
    }
}

/// Run the platform-specific capability check.
pub fn check_capabilities() -> Vec<Capability> {
    #[cfg(target_os = "macos")]
    {
        camcheck_platform_macos::permissions::check_capabilities()
    }
    #[cfg(target_os = "linux")]
    {
        camcheck_platform_linux::permissions::check_capabilities()
    }
    #[cfg(target_os = "windows")]
    {
        camcheck_platform_windows::check_capabilities()
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        camcheck_platform_linux::permissions::check_capabilities()
    }
}
