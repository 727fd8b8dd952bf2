//! Probe flow scenarios against a fake permission subsystem.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use camcheck_common::error::CamcheckResult;
use camcheck_permission_core::{AuthorizationStatus, RequestOutcome};
use camcheck_probe_engine::{
    report_status, request_if_undetermined, AccessCallback, CameraAuthority,
};

/// How the fake subsystem answers a consent request.
#[derive(Clone, Copy)]
enum FakeResponse {
    /// Invoke the callback immediately with the given outcome.
    Immediate(bool),
    /// Invoke the callback from another thread after a short delay.
    Delayed(bool, Duration),
    /// Hold the callback past any reasonable timeout, then drop it.
    Stall(Duration),
    /// Drop the callback without ever signaling.
    DropSignal,
}

struct FakeAuthority {
    status: AuthorizationStatus,
    response: FakeResponse,
    requests: AtomicUsize,
}

impl FakeAuthority {
    fn new(status: AuthorizationStatus, response: FakeResponse) -> Self {
        Self {
            status,
            response,
            requests: AtomicUsize::new(0),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl CameraAuthority for FakeAuthority {
    fn authorization_status(&self) -> CamcheckResult<AuthorizationStatus> {
        Ok(self.status)
    }

    fn request_access(&self, on_complete: AccessCallback) -> CamcheckResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.response {
            FakeResponse::Immediate(granted) => on_complete(granted),
            FakeResponse::Delayed(granted, delay) => {
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    on_complete(granted);
                });
            }
            FakeResponse::Stall(hold) => {
                std::thread::spawn(move || {
                    std::thread::sleep(hold);
                    drop(on_complete);
                });
            }
            FakeResponse::DropSignal => drop(on_complete),
        }
        Ok(())
    }
}

fn output_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("probe output is valid UTF-8")
}

#[test]
fn report_writes_one_fixed_line_per_status() {
    let cases = [
        (
            AuthorizationStatus::Authorized,
            "[OK] Camera access already authorized",
        ),
        (
            AuthorizationStatus::Denied,
            "[DENIED] Camera access denied (reset with: tccutil reset Camera)",
        ),
        (
            AuthorizationStatus::Restricted,
            "[RESTRICTED] Camera access restricted by device policy",
        ),
        (
            AuthorizationStatus::NotDetermined,
            "[?] Camera access not determined",
        ),
        (
            AuthorizationStatus::Unknown(42),
            "[?] Unknown authorization status (raw value 42)",
        ),
    ];

    for (status, expected) in cases {
        let authority = FakeAuthority::new(status, FakeResponse::DropSignal);
        let mut buf = Vec::new();

        let reported = report_status(&authority, &mut buf).unwrap();

        assert_eq!(reported, status);
        assert_eq!(
            output_of(buf),
            format!("Checking camera authorization status...\n{expected}\n")
        );
    }
}

#[tokio::test]
async fn settled_statuses_never_trigger_a_request() {
    for status in [
        AuthorizationStatus::Authorized,
        AuthorizationStatus::Denied,
        AuthorizationStatus::Restricted,
        AuthorizationStatus::Unknown(7),
    ] {
        let authority = FakeAuthority::new(status, FakeResponse::Immediate(true));
        let mut buf = Vec::new();

        let outcome = request_if_undetermined(&authority, Duration::from_secs(10), &mut buf)
            .await
            .unwrap();

        assert_eq!(outcome, RequestOutcome::AlreadySettled(status));
        assert_eq!(authority.request_count(), 0);
        assert!(!output_of(buf).contains("Requesting access now"));
    }
}

#[tokio::test]
async fn granted_before_timeout_prints_granted_exactly_once() {
    let authority = FakeAuthority::new(
        AuthorizationStatus::NotDetermined,
        FakeResponse::Immediate(true),
    );
    let mut buf = Vec::new();

    let outcome = request_if_undetermined(&authority, Duration::from_secs(10), &mut buf)
        .await
        .unwrap();

    assert_eq!(outcome, RequestOutcome::Granted);
    assert_eq!(authority.request_count(), 1);

    let text = output_of(buf);
    assert_eq!(text.matches("[OK] Access granted").count(), 1);
    assert!(text.contains("[?] Camera access not determined. Requesting access now..."));
}

#[tokio::test]
async fn denied_before_timeout_prints_denied_exactly_once() {
    let authority = FakeAuthority::new(
        AuthorizationStatus::NotDetermined,
        FakeResponse::Immediate(false),
    );
    let mut buf = Vec::new();

    let outcome = request_if_undetermined(&authority, Duration::from_secs(10), &mut buf)
        .await
        .unwrap();

    assert_eq!(outcome, RequestOutcome::Denied);
    assert_eq!(authority.request_count(), 1);
    assert_eq!(output_of(buf).matches("[DENIED] Access denied").count(), 1);
}

#[tokio::test]
async fn callback_from_another_thread_is_received() {
    let authority = FakeAuthority::new(
        AuthorizationStatus::NotDetermined,
        FakeResponse::Delayed(true, Duration::from_millis(20)),
    );
    let mut buf = Vec::new();

    let outcome = request_if_undetermined(&authority, Duration::from_secs(10), &mut buf)
        .await
        .unwrap();

    assert_eq!(outcome, RequestOutcome::Granted);
}

#[tokio::test]
async fn elapsed_timeout_stays_silent_on_stdout() {
    let authority = FakeAuthority::new(
        AuthorizationStatus::NotDetermined,
        FakeResponse::Stall(Duration::from_millis(500)),
    );
    let mut buf = Vec::new();

    let outcome = request_if_undetermined(&authority, Duration::from_millis(50), &mut buf)
        .await
        .unwrap();

    assert_eq!(outcome, RequestOutcome::TimedOut);
    assert_eq!(authority.request_count(), 1);

    let text = output_of(buf);
    assert_eq!(
        text,
        "Checking camera authorization status...\n\
         [?] Camera access not determined. Requesting access now...\n"
    );
}

#[tokio::test]
async fn dropped_completion_signal_counts_as_timeout() {
    let authority = FakeAuthority::new(AuthorizationStatus::NotDetermined, FakeResponse::DropSignal);
    let mut buf = Vec::new();

    let outcome = request_if_undetermined(&authority, Duration::from_secs(10), &mut buf)
        .await
        .unwrap();

    assert_eq!(outcome, RequestOutcome::TimedOut);
    assert!(!output_of(buf).contains("Access"));
}
