//! Trigger the camera consent prompt.

use std::time::Duration;

use camcheck_common::config::AppConfig;
use camcheck_common::error::CamcheckError;
use camcheck_probe_engine::{backend, request_if_undetermined};

pub async fn run(timeout_secs: Option<u64>) -> anyhow::Result<()> {
    let timeout_secs =
        timeout_secs.unwrap_or_else(|| AppConfig::load().probe.request_timeout_secs);
    let timeout = Duration::from_secs(timeout_secs);

    let authority = backend::default_authority();
    let mut stdout = std::io::stdout();

    match request_if_undetermined(authority.as_ref(), timeout, &mut stdout).await {
        Ok(outcome) => {
            tracing::debug!("Request flow finished: {:?}", outcome);
            Ok(())
        }
        // Platforms without a consent broker get guidance, not a failure.
        Err(CamcheckError::Unsupported { message }) => {
            println!("{message}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
