//! CamCheck Linux Platform Integration
//!
//! Platform-specific implementations for Linux:
//! - **Device Probing:** Video4Linux device-node enumeration
//! - **Permissions:** Device access and group-membership checks with
//!   user guidance
//!
//! Linux has no per-application consent broker for the camera; access is
//! governed by device-node permissions on `/dev/video*`.

pub mod devices;
pub mod permissions;

pub use devices::*;
