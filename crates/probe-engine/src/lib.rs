//! CamCheck Probe Engine
//!
//! The camera authorization probe flows and the platform backends that
//! feed them:
//! - **Authority:** the OS permission subsystem seam ([`CameraAuthority`])
//! - **Backends:** per-platform authority implementations and dispatch
//! - **Probe:** the report and consent-request flows

pub mod authority;
pub mod backend;
pub mod probe;

pub use authority::*;
pub use probe::*;
