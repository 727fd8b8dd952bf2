//! The OS permission subsystem seam.

use camcheck_common::error::CamcheckResult;
use camcheck_permission_core::AuthorizationStatus;

/// One-shot completion callback for an access request.
pub type AccessCallback = Box<dyn FnOnce(bool) + Send + 'static>;

/// Abstract interface over the OS media-capture permission subsystem.
///
/// Probe flows are written against this trait so they can run against a
/// fake subsystem in tests.
pub trait CameraAuthority: Send + Sync {
    /// Read the current camera authorization status. Synchronous.
    fn authorization_status(&self) -> CamcheckResult<AuthorizationStatus>;

    /// Issue one asynchronous consent request. The subsystem invokes
    /// `on_complete` exactly once, possibly on another thread, with the
    /// granted/denied outcome.
    fn request_access(&self, on_complete: AccessCallback) -> CamcheckResult<()>;
}
