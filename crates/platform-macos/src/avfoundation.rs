//! AVFoundation camera authorization FFI.

use std::sync::Mutex;

use block2::RcBlock;
use objc2::runtime::Bool;
use objc2_av_foundation::{AVCaptureDevice, AVMediaTypeVideo};

/// Raw `AVAuthorizationStatus` value for the video media type.
pub(crate) fn authorization_status_raw() -> i64 {
    let status = unsafe { AVCaptureDevice::authorizationStatusForMediaType(AVMediaTypeVideo) };
    status.0 as i64
}

/// Issue one asynchronous access request for the video media type.
///
/// The completion block fires exactly once on a dispatch queue owned by
/// AVFoundation. Blocks must be `Fn`, so the one-shot callback sits in a
/// `Mutex<Option<_>>` and is taken on first fire.
pub(crate) fn request_access(on_complete: Box<dyn FnOnce(bool) + Send + 'static>) {
    let slot = Mutex::new(Some(on_complete));
    let handler = RcBlock::new(move |granted: Bool| {
        let callback = slot.lock().ok().and_then(|mut guard| guard.take());
        if let Some(callback) = callback {
            callback(granted.as_bool());
        } else {
            tracing::warn!("Camera access completion fired more than once");
        }
    });

    unsafe {
        AVCaptureDevice::requestAccessForMediaType_completionHandler(AVMediaTypeVideo, &handler);
    }
}
