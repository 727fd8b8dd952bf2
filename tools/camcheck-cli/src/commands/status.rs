//! Report the camera authorization status.

use camcheck_common::error::CamcheckError;
use camcheck_probe_engine::{backend, report_status};

pub fn run() -> anyhow::Result<()> {
    let authority = backend::default_authority();
    let mut stdout = std::io::stdout();

    match report_status(authority.as_ref(), &mut stdout) {
        Ok(status) => {
            tracing::debug!("Reported authorization status: {:?}", status);
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
