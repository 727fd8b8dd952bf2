//! Camera authorization probe flows.
//!
//! Two flows share one branch table:
//! - [`report_status`] reads the status and writes its line, nothing else.
//! - [`request_if_undetermined`] additionally triggers the consent prompt
//!   when the decision is still open, waiting a bounded time for the
//!   subsystem's one-shot completion signal.

use std::io::Write;
use std::time::Duration;

use camcheck_common::error::CamcheckResult;
use camcheck_permission_core::{AuthorizationStatus, RequestOutcome};

use crate::authority::CameraAuthority;

/// Fixed report line for a status.
fn status_line(status: AuthorizationStatus) -> String {
    match status {
        AuthorizationStatus::Authorized => "[OK] Camera access already authorized".to_string(),
        AuthorizationStatus::Denied => format!(
            "[DENIED] Camera access denied (reset with: {})",
            camcheck_platform_macos::TCC_RESET_HINT
        ),
        AuthorizationStatus::Restricted => {
            "[RESTRICTED] Camera access restricted by device policy".to_string()
        }
        AuthorizationStatus::NotDetermined => "[?] Camera access not determined".to_string(),
        AuthorizationStatus::Unknown(raw) => {
            format!("[?] Unknown authorization status (raw value {raw})")
        }
    }
}

/// Read the current authorization status and write its report line.
///
/// No side effects beyond the write; unrecognized status values take the
/// Unknown branch instead of failing.
pub fn report_status(
    authority: &dyn CameraAuthority,
    out: &mut impl Write,
) -> CamcheckResult<AuthorizationStatus> {
    writeln!(out, "Checking camera authorization status...")?;
    let status = authority.authorization_status()?;
    writeln!(out, "{}", status_line(status))?;
    Ok(status)
}

/// Report the current status and, when it is still undetermined, issue
/// one consent request bounded by `timeout`.
///
/// The authority's completion callback is bridged onto a one-shot
/// channel; the sender is moved into the callback, so a second signal is
/// unrepresentable. On timeout nothing further is written to `out` — the
/// elapsed wait is only recorded as a diagnostic event.
pub async fn request_if_undetermined(
    authority: &dyn CameraAuthority,
    timeout: Duration,
    out: &mut impl Write,
) -> CamcheckResult<RequestOutcome> {
    writeln!(out, "Checking camera authorization status...")?;
    let status = authority.authorization_status()?;

    if status.is_settled() {
        writeln!(out, "{}", status_line(status))?;
        return Ok(RequestOutcome::AlreadySettled(status));
    }

    writeln!(out, "[?] Camera access not determined. Requesting access now...")?;

    let (tx, rx) = tokio::sync::oneshot::channel::<bool>();
    authority.request_access(Box::new(move |granted| {
        let _ = tx.send(granted);
    }))?;

    match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(true)) => {
            writeln!(out, "[OK] Access granted")?;
            Ok(RequestOutcome::Granted)
        }
        Ok(Ok(false)) => {
            writeln!(out, "[DENIED] Access denied")?;
            Ok(RequestOutcome::Denied)
        }
        Ok(Err(_)) => {
            tracing::warn!("Permission subsystem dropped the completion callback without signaling");
            Ok(RequestOutcome::TimedOut)
        }
        Err(_) => {
            tracing::warn!(
                "No response from the permission subsystem within {:?}",
                timeout
            );
            Ok(RequestOutcome::TimedOut)
        }
    }
}
